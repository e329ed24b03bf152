//! Cross-crate tests that drive the validator and scanner together over real
//! loopback sockets.

#[cfg(test)]
mod scan;
