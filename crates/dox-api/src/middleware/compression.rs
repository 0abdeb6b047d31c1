//! Response compression layer.

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;

/// Smallest body worth compressing, in bytes.
const MIN_COMPRESS_BYTES: u16 = 1024;

/// Gzip for clients that accept it, skipping small JSON bodies.
pub fn build_compression_layer() -> CompressionLayer<SizeAbove> {
    CompressionLayer::new().compress_when(SizeAbove::new(MIN_COMPRESS_BYTES))
}
