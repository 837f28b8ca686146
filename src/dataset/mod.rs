mod assembler;
mod record;
mod session;


pub use assembler::DatasetAssembler;
pub use record::{Dataset, Record};
pub use session::ParseSession;
