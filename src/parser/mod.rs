// Parser module: Crystal Description Language front end
// Preprocessing, tokenization and recursive-descent parsing of CDL text

// ======================== MODULE DECLARATIONS ========================
pub mod preprocessor;
pub mod lexer;
pub mod parse_tree;
pub mod cdl_parser;
pub mod tail_modifiers;

// Test modules
mod _tests_preprocessor;
mod _tests_lexer;
mod _tests_tail_modifiers;

// ======================== PREPROCESSING ========================
pub use preprocessor::{
    Preprocessed, // struct - cleaned text + definitions + doc comments
    preprocess,   // fn(input: &str) -> Result<Preprocessed> - strips comments, resolves @name definitions
};

// ======================== TOKENIZATION ========================
pub use lexer::{
    Lexer,     // struct - on-demand tokenizer with raw block capture
    Token,     // struct - token kind + text + character position
    TokenKind, // enum - CDL token classes (System, PointGroup, braces, numbers, ...)
};

// ======================== PARSE TREE ========================
pub use parse_tree::{
    CrystalAxis,      // enum - a, b, c axes for modifications
    CrystalForm,      // struct - miller index + scale + features + label
    FormGroup,        // struct - ordered children + shared features + label
    FormNode,         // enum - tagged CrystalForm | FormGroup
    MillerIndex,      // struct - (h,k,l) with optional redundant hexagonal i
    ModificationKind, // enum - elongate | flatten | scale
    ModificationSpec, // struct - kind + axis + positive factor
    ParseResult,      // struct - validated parse of one CDL expression
    TwinSpec,         // struct - twin law name from the modifier tail
    merge_features,   // fn(parent, child) -> Option<String> - "parent, child" concatenation
};

// ======================== PARSING ========================
pub use cdl_parser::parse; // fn(&Preprocessed) -> Result<ParseResult> - recursive descent entry point

// ======================== MODIFIER TAIL ========================
pub use tail_modifiers::{
    TailModifiers, // struct - twin + modifications + phenomenon + warnings
    extract,       // fn(tail: &str) -> TailModifiers - regex clause extraction
};
