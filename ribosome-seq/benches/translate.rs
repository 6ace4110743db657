use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ribosome_seq::{translate_codon, translate_sequence};

const CODING: [&[u8; 3]; 14] = [
    b"AUG", b"UUU", b"UUC", b"UUA", b"UUG", b"UCU", b"UCC", b"UCA", b"UCG", b"UAU", b"UAC",
    b"UGU", b"UGC", b"UGG",
];

/// Deterministic coding sequence with no stop codon.
fn random_coding_rna(n_codons: usize) -> Vec<u8> {
    let mut seq = Vec::with_capacity(n_codons * 3);
    let mut state: u64 = 42;
    for _ in 0..n_codons {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.extend_from_slice(CODING[((state >> 33) % CODING.len() as u64) as usize]);
    }
    seq
}

fn bench_translate_codon(c: &mut Criterion) {
    c.bench_function("translate_codon", |b| {
        b.iter(|| {
            for codon in CODING {
                black_box(translate_codon(black_box(codon)));
            }
        })
    });
}

fn bench_translate_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_sequence");
    for &n_codons in &[100usize, 10_000, 1_000_000] {
        let seq = random_coding_rna(n_codons);
        group.throughput(Throughput::Bytes(seq.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_codons), &seq, |b, seq| {
            b.iter(|| translate_sequence(black_box(seq)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_translate_codon, bench_translate_sequence);
criterion_main!(benches);
