#[cfg(test)]
mod render_tests {
    use crate::models::common::EditMode;
    use crate::models::field::{FieldDescriptor, FieldKind};
    use crate::models::schedule::{BlockField, ScheduleCatalog};
    use crate::services::form_state::{FieldPath, FormValue, PanelForm};
    use crate::services::render::{
        render_field, render_panel, render_schedule, Cell, Control, RoomTitle, ScheduleAction,
        LONG_TEXT_ROWS,
    };
    use crate::tests::common::fixtures::sample_panel;
    use crate::tests::common::fixtures::sample_schedule;

    #[test]
    fn test_field_kinds_dispatch_to_controls() {
        let form = PanelForm::from_panel(sample_panel());
        let view = render_panel(&form, false);

        assert_eq!(view.title.as_deref(), Some("Term settings"));
        assert!(matches!(
            &view.controls[0],
            Control::DateInput { value, .. } if value == "2025-03-01"
        ));
        assert!(matches!(&view.controls[1], Control::Toggle { checked: true, .. }));
        assert!(matches!(
            &view.controls[2],
            Control::TextArea { rows, .. } if *rows == LONG_TEXT_ROWS
        ));
        assert!(matches!(&view.controls[3], Control::TextInput { value, .. } if value == "T-2025"));

        match &view.controls[4] {
            Control::Group {
                label,
                description,
                children,
                ..
            } => {
                assert_eq!(label, "contact");
                assert_eq!(description.as_deref(), Some("Front desk"));
                assert_eq!(children.len(), 2);
                assert_eq!(children[0].path(), &FieldPath::root("contact").child("phone"));
                assert!(matches!(&children[1], Control::Toggle { checked: false, .. }));
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_date_range_renders_as_date_input() {
        let field = FieldDescriptor::new("window", FieldKind::DateRange("2025-03-01".to_string()));
        let control = render_field(&field, None, &Default::default());
        assert!(matches!(control, Control::DateInput { .. }));
    }

    #[test]
    fn test_controls_show_edited_values() {
        let form = PanelForm::from_panel(sample_panel());
        let toggle = render_panel(&form, false).controls[1].clone();

        let edit = toggle.edit(false).unwrap();
        let edited = form.apply_edit(&edit);
        let view = render_panel(&edited, false);
        assert!(matches!(&view.controls[1], Control::Toggle { checked: false, .. }));

        let edited = edited.apply_edit(&crate::services::form_state::FieldEdit {
            path: FieldPath::root("contact").child("phone"),
            value: FormValue::from("555-0199"),
        });
        match &render_panel(&edited, false).controls[4] {
            Control::Group { children, .. } => {
                assert!(matches!(
                    &children[0],
                    Control::TextInput { value, .. } if value == "555-0199"
                ));
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_group_yields_no_edit() {
        let form = PanelForm::from_panel(sample_panel());
        let group = &render_panel(&form, false).controls[4];
        assert!(group.edit("ignored").is_none());
    }

    #[test]
    fn test_schedule_view_mode_uses_placeholders() {
        let catalog = ScheduleCatalog::default();
        let view = render_schedule(&sample_schedule(), EditMode::View, false, false, &catalog);

        assert_eq!(view.available_rooms, vec!["Lab A".to_string()]);
        assert_eq!(view.toolbar.len(), 1);
        assert_eq!(view.toolbar[0].action, ScheduleAction::Edit);
        assert_eq!(view.columns, vec!["Block", "Course", "Instructor", "Supervision role"]);

        let room = &view.rooms[0];
        assert_eq!(room.title, RoomTitle::Heading("Room 101".to_string()));
        assert!(!room.can_add_block);

        let second = &room.blocks[1];
        assert_eq!(second.course, Cell::Text("Physics".to_string()));
        assert_eq!(second.instructor, Cell::Placeholder("Unassigned"));
        assert_eq!(second.role, Cell::Placeholder("Unassigned"));
        assert!(!second.removable);

        assert_eq!(view.rooms[1].blocks[0].course, Cell::Placeholder("Free"));
    }

    #[test]
    fn test_schedule_edit_mode_uses_selects() {
        let catalog = ScheduleCatalog::default();
        let view = render_schedule(&sample_schedule(), EditMode::Edit, false, false, &catalog);

        let actions: Vec<ScheduleAction> = view.toolbar.iter().map(|b| b.action).collect();
        assert_eq!(
            actions,
            vec![ScheduleAction::Save, ScheduleAction::Cancel, ScheduleAction::NewRoom]
        );
        assert!(view.toolbar.iter().all(|b| b.enabled));
        assert_eq!(view.columns.last(), Some(&"Actions"));

        let room = &view.rooms[0];
        assert!(matches!(&room.title, RoomTitle::Input { value, .. } if value == "Room 101"));
        assert!(room.can_add_block);
        assert!(room.blocks.iter().all(|b| b.removable));

        match &room.blocks[0].course {
            Cell::Select {
                field,
                value,
                empty_label,
                options,
            } => {
                assert_eq!(*field, BlockField::Course);
                assert_eq!(value, "Mathematics");
                assert_eq!(*empty_label, "Free");
                assert_eq!(options, &catalog.courses);
            }
            other => panic!("expected select, got {:?}", other),
        }
    }

    #[test]
    fn test_toolbar_disabled_while_saving() {
        let catalog = ScheduleCatalog::default();
        let view = render_schedule(&sample_schedule(), EditMode::Edit, true, false, &catalog);
        assert!(view.toolbar.iter().all(|b| !b.enabled));
        assert_eq!(view.toolbar[0].label, "Saving...");
    }

    #[test]
    fn test_edit_disabled_while_loading() {
        let catalog = ScheduleCatalog::default();
        let view = render_schedule(&sample_schedule(), EditMode::View, false, true, &catalog);
        assert!(view.loading);
        assert_eq!(view.toolbar[0].action, ScheduleAction::Edit);
        assert!(!view.toolbar[0].enabled);

        let panel = render_panel(&PanelForm::default(), true);
        assert!(panel.loading);
        assert!(panel.controls.is_empty());
    }
}
