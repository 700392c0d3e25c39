use super::*;
use crate::compose::cache::AvatarCache;
use crate::encode::png::PngEncoder;
use crate::foundation::error::AvatarError;
use crate::render::boxes::BoxRenderer;

fn cfg() -> AvatarConfig {
    AvatarConfig::builder()
        .font_bytes(vec![1u8])
        .size(40, 40)
        .font_size(20.0)
        .spacer(2)
        .position(0, 30)
        .build()
        .unwrap()
}

#[test]
fn to_disk_writes_a_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/dir/al.png");
    let c = AvatarComposer::new(BoxRenderer::new(10.0), AvatarCache::unbounded());

    let avatar = c
        .to_disk("Ada Lovelace", &ColorOverrides::none(), &cfg(), &out, &PngEncoder)
        .unwrap();

    let decoded = image::open(&out).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (40, 40));
    assert_eq!(decoded, *avatar.image);
}

#[test]
fn core_errors_leave_no_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("blank.png");
    let c = AvatarComposer::new(BoxRenderer::new(10.0), AvatarCache::unbounded());

    let err = c
        .to_disk("   ", &ColorOverrides::none(), &cfg(), &out, &PngEncoder)
        .unwrap_err();
    assert!(matches!(err, AvatarError::EmptyInput));
    assert!(!out.exists());
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a file.
    let c = AvatarComposer::new(BoxRenderer::new(10.0), AvatarCache::unbounded());
    let avatar = c.compose("Ada Lovelace", &ColorOverrides::none(), &cfg()).unwrap();
    assert!(write_avatar(&avatar, dir.path(), &PngEncoder).is_err());
}
