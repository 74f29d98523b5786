// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmark comparing the two scene payloads the server produces.
//!
//! Compares:
//! 1. Primitive descriptors (JSON) - what `/api/v1/scene` returns
//! 2. Tessellated meshes (JSON) - what `/api/v1/scene/meshes` returns
//!
//! Run with: cargo bench -p deck-scene-server --bench serialization

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use deck_scene_core::{parse_scene_data, SceneData};
use deck_scene_geometry::{build_scene, tessellate_scene, Profile};

const NAMES: [&str; 6] = [
    "VARIO FIX I (komplett)",
    "Konstruktionsbalken",
    "Konstruktionsbälkchen",
    "Befestigungsschraube 5x60",
    "Konstruktionsholz",
    "Barfußdiele",
];

/// Generate a synthetic deck plan with `element_count` elements.
fn generate_document(element_count: usize) -> SceneData {
    let elements: Vec<serde_json::Value> = (0..element_count)
        .map(|i| {
            // Every seventh element leaves its height out
            let hoehe = (i % 7 != 0).then_some(21.0);
            let drehung = if i % 2 == 0 { 0.0 } else { 90.0 };
            let (x, y) = ((i % 40) as f64 * 150.0, (i / 40) as f64 * 150.0);
            serde_json::json!({
                "name": NAMES[i % NAMES.len()],
                "laenge": 3000.0,
                "breite": 145.0,
                "hoehe": hoehe,
                "mittelpunkt": { "x": x, "y": y, "z": 40.0 },
                "drehung": drehung,
            })
        })
        .collect();

    let document = serde_json::json!({
        "elemente": elements,
        "gebaeude": [{ "laenge": 8000.0, "breite": 6000.0, "mittelpunkt": { "x": 3000.0, "y": -3000.0 } }],
        "marker": { "x": 0.0, "y": 0.0, "z": 0.0 },
        "basisflaechemittelpunkt": { "x": 3000.0, "y": 1500.0 },
    });

    parse_scene_data(&document.to_string()).expect("synthetic document is valid")
}

fn bench_output_size(_c: &mut Criterion) {
    println!("\n=== Payload size comparison ===\n");
    for count in [100, 1_000, 10_000] {
        let data = generate_document(count);
        let scene = build_scene(&data, Profile::Desktop).expect("scene builds");
        let descriptors = serde_json::to_vec(&scene).expect("descriptor JSON");
        let meshes: Vec<_> = tessellate_scene(&scene)
            .into_iter()
            .map(|m| (m.positions, m.normals, m.indices))
            .collect();
        let meshes = serde_json::to_vec(&meshes).expect("mesh JSON");

        println!(
            "{:>6} elements: descriptors {:>10} bytes, meshes {:>11} bytes ({:.1}x)",
            count,
            descriptors.len(),
            meshes.len(),
            meshes.len() as f64 / descriptors.len() as f64
        );
    }
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");

    for count in [100, 1_000, 10_000] {
        let data = generate_document(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("build_desktop", count), &data, |b, data| {
            b.iter(|| build_scene(black_box(data), Profile::Desktop))
        });

        group.bench_with_input(BenchmarkId::new("build_immersive", count), &data, |b, data| {
            b.iter(|| build_scene(black_box(data), Profile::immersive_at(0.0)))
        });

        let scene = build_scene(&data, Profile::Desktop).expect("scene builds");
        group.bench_with_input(BenchmarkId::new("descriptor_json", count), &scene, |b, scene| {
            b.iter(|| serde_json::to_vec(black_box(scene)))
        });

        group.bench_with_input(BenchmarkId::new("tessellate", count), &scene, |b, scene| {
            b.iter(|| tessellate_scene(black_box(scene)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_output_size, bench_serialization);
criterion_main!(benches);
