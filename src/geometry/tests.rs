use {
  super::*,
  crate::error::ErrorKind,
  euclid::Size2D
};

#[test] fn above_all_bands() {
  assert!(!Silhouette::tree().contains(P2::new(50.0, 5.0)));
}

#[test] fn top_band_bottom_edge() {
  let tree = Silhouette::tree();
  assert!(TREE_BANDS[0].contains(P2::new(50.0, 40.0)));
  assert!(tree.contains(P2::new(50.0, 40.0)));
}

#[test] fn bottom_row() {
  let tree = Silhouette::tree();
  // bottom band spans [-1.5, 101.5] at y = 88
  assert!(tree.contains(P2::new(-1.5, 88.0)));
  assert!(tree.contains(P2::new(101.5, 88.0)));
  assert!(!tree.contains(P2::new(-1.6, 88.0)));
  assert!(!tree.contains(P2::new(50.0, 88.1)));
}

#[test] fn asymmetric_top_band() {
  let (left, right) = TREE_BANDS[0].bounds_at(40.0).unwrap();
  let w = 26.0 / 31.0 * 53.0;
  assert_eq!(left, 51.0 - w / 2.0);
  assert_eq!(right, 47.0 + w / 2.0);
  assert_eq!(TREE_BANDS[0].bounds_at(40.5), None);
  assert_eq!(TREE_BANDS[0].bounds_at(18.9), None);
}

#[test] fn crossed_bounds_are_empty() {
  // apex of the middle band sits below its first row
  let middle = TREE_BANDS[1];
  let (left, right) = middle.bounds_at(23.0).unwrap();
  assert!(left > right);
  assert!(!middle.contains(P2::new(50.0, 23.0)));
  // ...while the top band still covers that row
  assert!(Silhouette::tree().contains(P2::new(50.0, 23.0)));
}

#[test] fn bands_are_a_disjunction() {
  let narrow = Band {
    min_y: 0.0, max_y: 10.0, apex: 0.0, height: 10.0,
    bottom_width: 2.0, left_center: 5.0, right_center: 5.0
  };
  let wide = Band { bottom_width: 10.0, ..narrow };
  let point = P2::new(8.0, 10.0);
  assert!(!narrow.contains(point));
  assert!(wide.contains(point));

  let shape = Silhouette::new(vec![narrow, wide]).unwrap();
  assert!(shape.contains(point));
  let shape = Silhouette::new(vec![wide, narrow]).unwrap();
  assert!(shape.contains(point));
}

#[test] fn tree_bounding_box() {
  let bbox = Silhouette::tree().bounding_box();
  assert_eq!(bbox.min, P2::new(-1.5, 19.0));
  assert_eq!(bbox.max, P2::new(101.5, 88.0));
}

#[test] fn invalid_bands() {
  let band = TREE_BANDS[0];
  let err = Band { height: 0.0, ..band }.validate().unwrap_err();
  assert!(matches!(err.downcast_ref::<ErrorKind>(), Some(ErrorKind::InvalidConfig(_))));
  assert!(Band { min_y: 50.0, ..band }.validate().is_err());
  assert!(Band { apex: f64::NAN, ..band }.validate().is_err());
  assert!(Silhouette::<f64>::new(vec![]).is_err());
  assert!(Silhouette::new(vec![band, Band { max_y: f64::INFINITY, ..band }]).is_err());
  assert_eq!(Silhouette::new(TREE_BANDS.to_vec()).unwrap(), Silhouette::tree());
}

#[test] fn viewport_mapping() {
  let p = to_viewport(P2::new(50.0, 25.0), Size2D::new(800.0, 600.0));
  assert_eq!(p.to_array(), [400.0, 150.0]);
}

#[test] fn region_by_reference() {
  fn count_inside<R: Region<f64>>(region: R, points: &[P2]) -> usize {
    points.iter().filter(|&&p| region.contains(p)).count()
  }
  let tree = Silhouette::tree();
  let points = [P2::new(50.0, 5.0), P2::new(50.0, 40.0), P2::new(50.0, 70.0)];
  assert_eq!(count_inside(&tree, &points), 2);
}
