use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use decoder::{DetectionDecoder, RawOutput};
use ndarray::{Array, IxDyn};

const NUM_QUERIES: usize = 300;
const NUM_CLASSES: usize = 91;

/// Create mock RF-DETR output where the first `num_detections` queries carry
/// one high logit and every other logit is far below the threshold.
fn create_mock_rfdetr_output(num_detections: usize) -> RawOutput {
    let mut box_data = vec![0.0f32; NUM_QUERIES * 4];
    let mut logit_data = vec![-10.0f32; NUM_QUERIES * NUM_CLASSES];

    for i in 0..num_detections.min(NUM_QUERIES) {
        box_data[i * 4..i * 4 + 4].copy_from_slice(&[0.5, 0.5, 0.2, 0.2]);
        logit_data[i * NUM_CLASSES + (i % NUM_CLASSES)] = 4.0;
    }

    let boxes = Array::from_shape_vec(IxDyn(&[1, NUM_QUERIES, 4]), box_data).unwrap();
    let logits = Array::from_shape_vec(IxDyn(&[1, NUM_QUERIES, NUM_CLASSES]), logit_data).unwrap();

    RawOutput::new(boxes, logits)
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let decoder = DetectionDecoder::default();

    let detection_counts = [0, 5, 20, 50, 300];

    for num_detections in detection_counts.iter() {
        let output = create_mock_rfdetr_output(*num_detections);

        group.bench_with_input(
            BenchmarkId::new("allocate", num_detections),
            &output,
            |b, output| {
                b.iter(|| decoder.decode(black_box(output)).unwrap());
            },
        );

        let mut target = Vec::with_capacity(NUM_QUERIES);
        group.bench_with_input(
            BenchmarkId::new("reuse_buffer", num_detections),
            &output,
            |b, output| {
                b.iter(|| {
                    target.clear();
                    decoder
                        .decode_into(black_box(output), &mut target)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_decode);
criterion_main!(benches);
