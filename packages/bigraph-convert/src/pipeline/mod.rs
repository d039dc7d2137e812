pub mod converter;

pub use converter::{
    convert_pair, encode_pair, write_output, ConversionReport, ConversionRequest, EncodedPair,
};
