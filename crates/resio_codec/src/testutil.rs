//! Shared helpers for codec tests.

use crate::codec::Codec;
use resio_transport::{RawSink, TransportResult, WriteStream};
use std::io::{self, Cursor, Read, Write};
use std::sync::{Arc, Mutex};

/// A sink that appends into a shared buffer, so encoded bytes can be
/// inspected after `finish` consumes the stream.
pub(crate) struct SharedSink(pub(crate) Arc<Mutex<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteStream for SharedSink {
    fn close(&mut self) -> TransportResult<()> {
        Ok(())
    }
}

/// Encodes `data` through the codec, then decodes the result.
///
/// Returns `(encoded, decoded)`.
pub(crate) fn roundtrip(codec: &dyn Codec, level: i32, data: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink: RawSink = Box::new(SharedSink(Arc::clone(&buffer)));

    let mut encoder = codec.encoder(sink, level).unwrap();
    encoder.write_all(data).unwrap();
    let mut raw = encoder.finish().unwrap();
    raw.flush().unwrap();
    raw.close().unwrap();
    drop(raw);

    let encoded = buffer.lock().unwrap().clone();

    let mut decoder = codec.decoder(Box::new(Cursor::new(encoded.clone()))).unwrap();
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded).unwrap();

    (encoded, decoded)
}
