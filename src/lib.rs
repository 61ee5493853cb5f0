pub mod analysis;
pub mod cellar;
pub mod engine;
pub mod layout;
