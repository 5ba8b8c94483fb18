/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feff_driver::atoms::{Atom, AtomicStructure, Vector3D};
use feff_driver::input::{write_feff_input_to, FeffOptions};
use feff_driver::output::{parse_chi, parse_feff_dat};

fn synthetic_chi(points: usize) -> String {
    let mut text = String::from(" synthetic chi(k)\n  k chi mag phase @#\n");
    for i in 0..points {
        let k = i as f64 * 0.05;
        text.push_str(&format!(
            "{:8.4} {:14.6E} {:14.6E} {:14.6E}\n",
            k,
            (2.0 * k).sin() * 0.1,
            0.1,
            2.0 * k
        ));
    }
    text
}

fn synthetic_path(points: usize) -> String {
    let mut text = String::from(
        " Path 1 icalc 2 genfmt 3.0\n ---------------\n 2 12.000 2.5527 4.8239 -12.97 nleg, deg, reff\n x y z pot at#\n 0.0 0.0 0.0 0 29\n 1.805 1.805 0.0 1 29\n k real[2*phc] mag[feff] phase[feff] red factor lambda real[p]@#\n",
    );
    for i in 0..points {
        let k = i as f64 * 0.1;
        text.push_str(&format!(
            "{:8.3} {:12.4E} {:12.4E} {:12.4E} {:10.3E} {:12.4E} {:12.4E}\n",
            k,
            2.7 - 0.01 * k,
            0.1 * k,
            -1.6 - 0.02 * k,
            1.0,
            50.0 - k,
            1.87 + 0.01 * k
        ));
    }
    text
}

fn parser_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Output Parsing");

    let chi = synthetic_chi(401);
    group.bench_function("parse_chi", |b| {
        b.iter(|| parse_chi(black_box(chi.as_bytes())).unwrap())
    });

    let path = synthetic_path(60);
    group.bench_function("parse_feff_dat", |b| {
        b.iter(|| parse_feff_dat(black_box(path.as_bytes())).unwrap())
    });

    group.finish();
}

fn writer_benchmark(c: &mut Criterion) {
    let atoms = (0..500)
        .map(|i| {
            let z = if i % 3 == 0 { 8 } else { 29 };
            let r = i as f64 * 0.37;
            Atom::new(z, Vector3D::new(r.sin() * r, r.cos() * r, 0.1 * r), 0).unwrap()
        })
        .collect();
    let structure = AtomicStructure::from_atoms(atoms);
    let options = FeffOptions::new().with("RMAX", 6.0).with("CONTROL", "1 1 1 1 1 1");

    c.bench_function("write_feff_input", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(32 * 1024);
            write_feff_input_to(&mut buffer, black_box(&structure), 1, &options).unwrap();
            buffer
        })
    });
}

criterion_group!(benches, parser_benchmark, writer_benchmark);
criterion_main!(benches);
