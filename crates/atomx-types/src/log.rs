pub mod targets {
    pub const VALIDATION: &str = "atomx::validation";
    pub const LEXER: &str = "atomx::lexer";
    pub const PARSER: &str = "atomx::parser";
    pub const EVAL: &str = "atomx::eval";
}
