use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;

use rvdecode::{DecodeError, Decoder, Instruction, RiscvDecoder};

const SAMPLE: [u32; 8] = [
    0x0000_0001,
    0x0000_4505,
    0x0000_0013,
    0x0000_0063,
    0x0000_8000,
    0x4000_2557,
    0xc000_2573,
    0x0000_0007,
];

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn decoder_and_records_cross_threads() {
    assert_send_sync::<RiscvDecoder>();
    assert_send_sync::<Instruction>();
    assert_send_sync::<DecodeError>();

    let dec = Arc::new(RiscvDecoder::new());
    let expected: Vec<_> = SAMPLE.iter().map(|&w| dec.decode(w)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dec = Arc::clone(&dec);
            thread::spawn(move || {
                (0..200)
                    .flat_map(|_| SAMPLE.iter().map(|&w| dec.decode(w)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        let got = h.join().unwrap();
        for chunk in got.chunks(SAMPLE.len()) {
            assert_eq!(chunk, expected.as_slice());
        }
    }
}
