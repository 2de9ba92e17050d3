#![no_main]

use hushframe::{Denoiser, DenoiserConfig, FRAME_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|samples: Vec<f32>| {
    let Ok(mut denoiser) = Denoiser::new(DenoiserConfig::default()) else {
        return;
    };
    let mut output = [0.0f32; FRAME_SIZE];
    for chunk in samples.chunks(FRAME_SIZE) {
        match denoiser.process_frame(chunk, &mut output) {
            Ok(_) => assert_eq!(chunk.len(), FRAME_SIZE),
            Err(_) => assert!(chunk.len() < FRAME_SIZE),
        }
    }
});
