use crate::utils::error::Result;

/// Read access to the project profile. Implemented by the TOML-backed
/// `Profile` and by test doubles.
pub trait ProfileProvider {
    fn project_name(&self) -> &str;
    fn author(&self) -> &str;
    fn motto(&self) -> &str;
    fn location(&self) -> &str;
    fn version(&self) -> &str;
    fn year_started(&self) -> i32;
    fn current_year(&self) -> i32;
    fn services(&self) -> &[String];
    fn scores(&self) -> &[f64];
}

/// Uniform interface over the optional speech collaborator. The real
/// adapter shells out to a local engine; the null adapter does nothing.
pub trait Speech {
    fn engine_name(&self) -> &str;
    fn speak(&self, text: &str) -> Result<()>;
}
