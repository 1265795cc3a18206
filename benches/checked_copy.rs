use core::ffi::c_void;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use guardcpy::memcpy::guarded_memcpy;
use std::time::Duration;

unsafe extern "C" {
    #[link_name = "memcpy"]
    fn libc_memcpy(dest: *mut c_void, src: *const c_void, n: usize) -> *mut c_void;
}

#[derive(Clone)]
struct CopyCase {
    label: String,
    len: usize,
    src_off: usize,
    dst_off: usize,
}

fn configure_group_for_len(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    len: usize,
) {
    if len >= 1 << 20 {
        group.sample_size(20);
        group.warm_up_time(Duration::from_millis(300));
        group.measurement_time(Duration::from_millis(900));
    } else if len >= 1 << 16 {
        group.sample_size(30);
        group.warm_up_time(Duration::from_millis(250));
        group.measurement_time(Duration::from_millis(700));
    } else {
        group.sample_size(40);
        group.warm_up_time(Duration::from_millis(200));
        group.measurement_time(Duration::from_millis(500));
    }
}

fn checked_copy_benches(c: &mut Criterion) {
    let mut cases = Vec::new();

    // The fixed-width fast path, the dispatch cliffs around it, and bulk
    // word-loop sizes.
    let sizes = [
        1usize, 2, 3, 4, 7, 8, 13, 15, 16, 17, 31, 32, 33, 63, 64, 65, 127, 128, 255, 256, 511,
        512, 1023, 1024, 4095, 4096, 65535, 65536, 1 << 20,
    ];

    for len in sizes {
        cases.push(CopyCase {
            label: format!("size_{len}"),
            len,
            src_off: 0,
            dst_off: 0,
        });
    }

    // Misalignment forces the vector-eligible sizes onto the general path.
    let align_sizes = [16usize, 32, 64, 4096];
    let align_pairs = [(1usize, 1usize), (15, 7), (31, 17)];
    for len in align_sizes {
        for (src_off, dst_off) in align_pairs {
            cases.push(CopyCase {
                label: format!("align_len{len}_s{src_off}_d{dst_off}"),
                len,
                src_off,
                dst_off,
            });
        }
    }

    let mut group = c.benchmark_group("checked_copy");

    for case in &cases {
        let len = case.len;
        let src_off = case.src_off;
        let dst_off = case.dst_off;

        let alloc_len = len + 64;
        let mut src = vec![0u8; alloc_len];
        let mut dst = vec![0u8; alloc_len];
        for (i, byte) in src.iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }

        let src_ptr = unsafe { src.as_ptr().add(src_off) };
        let dst_ptr = unsafe { dst.as_mut_ptr().add(dst_off) };

        configure_group_for_len(&mut group, len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("glibc", &case.label), &len, |b, &n| {
            b.iter(|| unsafe {
                libc_memcpy(
                    black_box(dst_ptr as *mut c_void),
                    black_box(src_ptr as *const c_void),
                    black_box(n),
                );
                black_box(core::ptr::read_volatile(dst_ptr));
            });
        });

        group.bench_with_input(BenchmarkId::new("guardcpy", &case.label), &len, |b, &n| {
            b.iter(|| unsafe {
                guarded_memcpy(black_box(dst_ptr), black_box(src_ptr), black_box(n));
                black_box(core::ptr::read_volatile(dst_ptr));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, checked_copy_benches);
criterion_main!(benches);
