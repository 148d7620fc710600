/// Configuration for the wide-to-long reshape
#[derive(Debug, Clone)]
pub struct MeltConfig {
    /// Columns replicated unchanged onto every output row
    pub id_vars: Vec<String>,

    /// Columns consumed by the reshape, one output row per column per input row
    pub value_vars: Vec<String>,

    /// Name of the output column holding the originating column's name
    pub var_name: String,

    /// Name of the output column holding the originating column's value
    pub value_name: String,
}

impl Default for MeltConfig {
    fn default() -> Self {
        MeltConfig {
            id_vars: vec![],
            value_vars: vec![],
            var_name: String::from("variable"),
            value_name: String::from("value"),
        }
    }
}
