// Unit tests for domain models

use super::*;

#[test]
fn test_platform_parse() {
    assert_eq!(Platform::parse("android").unwrap(), Platform::Android);
    assert_eq!(Platform::parse("iOS").unwrap(), Platform::Ios);
    assert_eq!(Platform::parse("other").unwrap(), Platform::Other);
    assert_eq!(Platform::parse("desktop").unwrap(), Platform::Other);
    assert!(Platform::parse("windows-phone").is_err());
}

#[test]
fn test_platform_display_roundtrips_through_parse() {
    for platform in [Platform::Android, Platform::Ios, Platform::Other] {
        assert_eq!(Platform::parse(&platform.to_string()).unwrap(), platform);
    }
}

#[test]
fn test_storage_roots_trailing_separator() {
    let roots = StorageRoots::new("/data/files", "/cache/").unwrap();
    assert_eq!(roots.files_dir, "/data/files/");
    assert_eq!(roots.temp_dir, "/cache/");
    assert_eq!(roots.temp_path("a.mp4"), "/cache/a.mp4");
}

#[test]
fn test_storage_roots_empty() {
    assert!(StorageRoots::new("", "/tmp").is_err());
    assert!(StorageRoots::new("/data", "").is_err());
}

#[test]
fn test_chooser_request_validation() {
    let mimes = vec!["video/mp4".to_string(), "video/quicktime".to_string()];
    let request = ChooserRequest::new(100_000_000, &mimes).unwrap();
    assert_eq!(request.joined_mime_types(), "video/mp4,video/quicktime");
    assert!(request.allows("VIDEO/MP4"));
    assert!(!request.allows("video/webm"));

    assert!(ChooserRequest::new(0, &mimes).is_err());
    assert!(ChooserRequest::new(10, &[]).is_err());
}

#[test]
fn test_pick_failure_alert_message() {
    let invalid = PickFailure::InvalidSize(INVALID_SIZE_MESSAGE.to_string());
    assert_eq!(invalid.alert_message(), "Invalid size");

    let read = PickFailure::ReadError("permission denied".to_string());
    assert_eq!(read.alert_message(), "Error while reading file");
}

#[test]
fn test_pick_outcome_selected() {
    let outcome = PickOutcome::Selected(7);
    assert_eq!(outcome.selected(), Some(7));

    let cancelled: PickOutcome<u8> = PickOutcome::Cancelled;
    assert_eq!(cancelled, PickOutcome::Cancelled);
    assert_eq!(cancelled.selected(), None);

    let failed: PickOutcome<u8> = PickOutcome::Failed(PickFailure::ReadError("x".into()));
    assert_ne!(failed, PickOutcome::Cancelled);
    assert_eq!(failed.selected(), None);
}

#[test]
fn test_gallery_request_video_library() {
    let request = GalleryRequest::video_library();
    assert_eq!(request.source_type, PictureSourceType::PhotoLibrary);
    assert_eq!(request.media_type, MediaType::Video);
    assert!(!request.save_to_photo_album);
}

#[test]
fn test_encode_policy_defaults() {
    let policy = EncodePolicy::default();
    assert_eq!(policy.scale_max_width, 1280);
    assert_eq!(policy.scale_max_height, 1280);
    assert_eq!(policy.preset, "veryfast");
    assert!(policy.fast_start);
    assert!(policy.validate().is_ok());
    assert_eq!(
        policy.scale_filter(),
        "scale=w=1280:h=1280:force_original_aspect_ratio=decrease"
    );
}

#[test]
fn test_encode_policy_invalid() {
    let mut policy = EncodePolicy::default();
    policy.scale_max_width = 0;
    assert!(policy.validate().is_err());

    let mut policy = EncodePolicy::default();
    policy.preset = "very fast".to_string();
    assert!(policy.validate().is_err());
}

#[test]
fn test_probe_result_dimensions() {
    let result = MediaProbeResult {
        path: "/tmp/a.mov".to_string(),
        format: "mov,mp4,m4a,3gp,3g2,mj2".to_string(),
        duration_seconds: Some(12.5),
        size_bytes: Some(1024),
        bit_rate: None,
        streams: vec![
            ProbeStream {
                index: 0,
                codec_type: "audio".to_string(),
                codec_name: "aac".to_string(),
                width: None,
                height: None,
            },
            ProbeStream {
                index: 1,
                codec_type: "video".to_string(),
                codec_name: "hevc".to_string(),
                width: Some(1920),
                height: Some(1080),
            },
        ],
    };
    assert_eq!(result.dimensions(), Some((1920, 1080)));
    assert_eq!(result.primary_video_stream().unwrap().codec_name, "hevc");
    assert_eq!(MediaProbeResult::default().dimensions(), None);
}
