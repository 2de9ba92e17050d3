#![no_main]

use std::ptr;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use hushframe::ffi::functions::*;
use hushframe::ffi::types::*;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    operations: Vec<FuzzOp>,
    samples: Vec<f32>,
}

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Process {
        input_len: u16,
        output_len: u16,
        null_handle: bool,
        in_place: bool,
    },
    ProcessChecked {
        input_len: u16,
        output_len: u16,
    },
    GetStatistics,
}

fuzz_target!(|input: FuzzInput| {
    let handle = hf_create();
    if handle.is_null() {
        return;
    }

    let mut src = input.samples.clone();
    src.resize(src.len().max(hf_frame_size() * 2), 0.0);
    let mut dest = vec![0.0f32; src.len()];

    for op in &input.operations {
        match *op {
            FuzzOp::Process {
                input_len,
                output_len,
                null_handle,
                in_place,
            } => {
                let h = if null_handle { ptr::null_mut() } else { handle };
                let input_len = usize::from(input_len).min(src.len());
                let output_len = usize::from(output_len).min(dest.len());
                let before = dest.clone();
                // SAFETY: lengths are clamped to the backing vectors.
                let vad = unsafe {
                    if in_place {
                        let len = input_len.min(output_len);
                        hf_process_frame(h, src.as_ptr(), len, src.as_mut_ptr(), len)
                    } else {
                        hf_process_frame(h, src.as_ptr(), input_len, dest.as_mut_ptr(), output_len)
                    }
                };
                if null_handle || input_len < 480 || output_len < 480 {
                    assert_eq!(vad, HF_SENTINEL_VAD);
                    if !in_place {
                        assert_eq!(
                            dest.iter().map(|s| s.to_bits()).collect::<Vec<_>>(),
                            before.iter().map(|s| s.to_bits()).collect::<Vec<_>>()
                        );
                    }
                }
            }
            FuzzOp::ProcessChecked {
                input_len,
                output_len,
            } => {
                let mut vad = 0.0f32;
                let input_len = usize::from(input_len).min(src.len());
                let output_len = usize::from(output_len).min(dest.len());
                // SAFETY: lengths are clamped to the backing vectors.
                let _ = unsafe {
                    hf_process_frame_checked(
                        handle,
                        src.as_ptr(),
                        input_len,
                        dest.as_mut_ptr(),
                        output_len,
                        &mut vad,
                    )
                };
            }
            FuzzOp::GetStatistics => {
                let mut stats = HfStats::default();
                // SAFETY: live handle, valid out-pointer.
                let _ = unsafe { hf_get_statistics(handle, &mut stats) };
            }
        }
    }

    // SAFETY: destroyed exactly once.
    unsafe { hf_destroy(handle) };
});
