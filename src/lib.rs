pub mod bits;
pub mod decoder;
pub mod disasm;
pub mod instructions;
pub mod operands;
pub mod report;
pub mod trace;

pub mod isa {
    pub mod rv64; // base integer + scalar float, 32-bit encodings
    pub mod rvc; // RV64C
    pub mod rvv; // vector, load-fp/store-fp
}

pub use decoder::{classify, decode, DecodeError, Decoder, ErrorKind, Instruction, Op, RiscvDecoder, Width};
pub use operands::{Format, Operands};
pub use report::Summary;
pub use trace::{TraceConfig, TraceError, TraceReader};
