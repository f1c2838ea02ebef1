//! Integration tests for the export flow.
//!
//! Runs edited projects through `ExportSession` with the simulated exporter.

use sceneforge_editor::{
    ExportError, ExportForm, ExportSession, ExportStatus, Notification, NotificationKind,
    SimulatedExporter,
};
use sceneforge_scene::ops;
use sceneforge_scene::{AspectRatio, ExportFormat, Quality, Resolution, VideoProject};

fn three_scene_project() -> VideoProject {
    let mut project = VideoProject::new("Launch", AspectRatio::Square);
    let scenes = ops::duplicate_scene(&project.scenes, 0).updated_scenes;
    let scenes = ops::update_scene_duration(&scenes, 1, 10_000).updated_scenes;
    let scenes = ops::add_scene(&scenes).updated_scenes;
    project.set_scenes(scenes);
    project
}

#[test]
fn export_estimate_follows_edited_duration() {
    let project = three_scene_project();
    assert_eq!(project.duration, 20_000);
    assert_eq!(ExportForm::project_duration_secs(&project), 20.0);

    let mut form = ExportForm::default();
    assert_eq!(form.estimated_size(&project), "10.0");
    form.resolution = Resolution::Hd720;
    form.quality = Quality::Low;
    assert_eq!(form.estimated_size(&project), "3.0");
}

#[test]
fn export_completes_and_notifies() {
    let project = three_scene_project();
    let form = ExportForm {
        format: ExportFormat::Mov,
        ..Default::default()
    };
    let mut exporter = SimulatedExporter::new(30);
    let mut session = ExportSession::new();
    let mut notes: Vec<Notification> = Vec::new();

    let video = session
        .export(&mut exporter, &project, form.to_settings(), &mut notes)
        .unwrap();

    let uri = video.uri.unwrap();
    assert!(uri.ends_with(&format!("{}.mov", project.id)));

    let last = session.progress().unwrap();
    assert_eq!(last.status, ExportStatus::Complete);
    assert_eq!(last.progress, 100.0);

    assert_eq!(
        notes,
        vec![Notification::titled(
            NotificationKind::Success,
            "Export Complete",
            "Launch has been exported successfully!",
        )]
    );
}

#[test]
fn export_failure_is_reported() {
    let project = three_scene_project();
    let mut exporter = SimulatedExporter::new(30);
    exporter.fail_with = Some("disk full".into());
    let mut session = ExportSession::new();
    let mut notes: Vec<Notification> = Vec::new();

    let err = session
        .export(&mut exporter, &project, Default::default(), &mut notes)
        .unwrap_err();
    assert_eq!(err, ExportError::Failed("disk full".into()));
    assert_eq!(session.progress().map(|p| p.status), Some(ExportStatus::Error));

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);
    assert_eq!(notes[0].title, "Export Failed");
    assert_eq!(notes[0].message, "Failed to export Launch: disk full");

    session.reset();
    assert!(session.progress().is_none());
}
