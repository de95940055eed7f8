// Upload FIFO and slot assignment.

use tree_core::{fit_within, ImageId, PhotoQueue, Scene, SceneConfig};

#[test]
fn twelve_uploads_keep_last_nine_in_order() {
    let mut q = PhotoQueue::default();
    let mut evicted = Vec::new();
    for i in 0..12 {
        evicted.extend(q.push(ImageId(i)));
    }
    let kept: Vec<u64> = q.iter().map(|id| id.0).collect();
    assert_eq!(kept, (3..12).collect::<Vec<_>>());
    assert_eq!(evicted, vec![ImageId(0), ImageId(1), ImageId(2)]);
}

#[test]
fn slots_cycle_through_few_uploads() {
    let mut q = PhotoQueue::default();
    assert_eq!(q.image_for_slot(0), None);
    q.extend([ImageId(7), ImageId(8)]);
    let shown: Vec<u64> = (0..9).filter_map(|s| q.image_for_slot(s)).map(|i| i.0).collect();
    assert_eq!(shown, vec![7, 8, 7, 8, 7, 8, 7, 8, 7]);
}

#[test]
fn scene_upload_reports_evictions() {
    let mut s = Scene::new(SceneConfig {
        foliage_count: 100,
        ornament_count: 0,
        snow_count: 0,
        star_count: 0,
        seed: Some(2),
        ..SceneConfig::default()
    })
    .unwrap();
    let ids: Vec<_> = (0..10).map(|_| s.allocate_image_id()).collect();
    let evicted = s.upload(ids.clone());
    assert_eq!(evicted, vec![ids[0]]);
    assert_eq!(s.image_for_slot(0), Some(ids[1]));
}

#[test]
fn downscale_preserves_aspect() {
    assert_eq!(fit_within(4096, 2048, 2048), (2048, 1024));
    assert_eq!(fit_within(1000, 3000, 2048), (683, 2048));
    assert_eq!(fit_within(800, 600, 2048), (800, 600));
}
