#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::core::animation::CounterAnimation;
    use crate::core::forms::{
        FieldErrors, FieldEvent, FormData, FormEvent, FormKind, FormPhase, field_event,
        normalize_input, validate_form,
    };
    use crate::core::reveal::{OnceSet, ScrollAnimation};
    use crate::core::scroll::{FrameGate, NavbarState, SectionRegistry, progress_percent};
    use crate::core::validation::{ValidationError, format_phone, validate_delivery_input};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    // ========================================================================
    // Forms
    // ========================================================================

    #[test]
    fn test_invalid_submit_returns_to_idle_with_errors() {
        let phase = FormPhase::Idle.apply(FormEvent::Submit).unwrap();
        let errors = validate_form(FormKind::Newsletter, &FormData::new(), today());

        let event = if errors.is_empty() {
            FormEvent::Valid
        } else {
            FormEvent::Invalid
        };
        assert_eq!(phase.apply(event), Ok(FormPhase::Idle));
        assert_eq!(errors.get("email"), Some(&ValidationError::Required));
    }

    #[test]
    fn test_typed_phone_passes_form_validation() {
        let mut phone = String::new();
        for digit in "5559876543".chars() {
            phone.push(digit);
            phone = format_phone(&phone);
        }

        let data = FormData::new()
            .with("contactName", "Lee Park")
            .with("email", "lee@example.org")
            .with("phone", phone)
            .with("projectType", "community")
            .with("quantity", "50-100");
        assert!(validate_form(FormKind::BulkOrder, &data, today()).is_empty());
    }

    #[test]
    fn test_date_change_then_focus_clears() {
        let mut errors = FieldErrors::new();
        // 2026-10-25 is a Sunday
        errors.apply(
            "deliveryDate",
            validate_delivery_input("2026-10-25", today()),
        );
        assert_eq!(
            errors.message("deliveryDate").as_deref(),
            Some("Delivery not available on Sundays")
        );

        errors.clear("deliveryDate");
        errors.clear("deliveryDate");
        assert!(errors.is_empty());
    }

    // ========================================================================
    // Scroll
    // ========================================================================

    #[test]
    fn test_scroll_burst_drives_single_update() {
        let mut gate = FrameGate::new();
        let mut registry = SectionRegistry::new();
        registry.push("home", 0.0, 0);
        registry.push("plants", 800.0, 1);
        registry.push("contact", 2000.0, 2);

        let mut updates = Vec::new();
        for scroll in [700.0, 720.0, 760.0, 810.0] {
            if gate.request() {
                updates.push(scroll);
            }
        }
        assert_eq!(updates, vec![700.0]);

        // the frame runs with the latest position
        let latest = 810.0;
        gate.complete();
        let active = registry.active(latest).map(|s| s.id.as_str());
        assert_eq!(active, Some("plants"));
        assert!(NavbarState::at(latest).scrolled);
        assert!((progress_percent(latest, 3000.0, 1000.0) - 40.5).abs() < 1e-9);
    }

    // ========================================================================
    // Field interaction
    // ========================================================================

    #[test]
    fn test_bulk_order_interaction_then_submit() {
        let kind = FormKind::BulkOrder;
        let field = |name| *kind.field(name).unwrap();
        let mut data = FormData::new();
        let mut errors = FieldErrors::new();

        data.set("projectType", "residential");
        field_event(kind, &field("projectType"), FieldEvent::Change, &data, today(), &mut errors);
        data.set("quantity", "1000+");
        field_event(kind, &field("quantity"), FieldEvent::Change, &data, today(), &mut errors);
        assert_eq!(errors.get("quantity"), Some(&ValidationError::QuantityTooLarge));

        // switching to a corporate project lifts the cap
        data.set("projectType", "corporate");
        field_event(kind, &field("projectType"), FieldEvent::Change, &data, today(), &mut errors);
        assert!(!errors.has_error("quantity"));

        let phone = normalize_input(&field("phone"), "5551234567".to_string());
        data.set("phone", phone);
        field_event(kind, &field("phone"), FieldEvent::Blur, &data, today(), &mut errors);
        assert!(errors.is_empty());

        // submit still needs the contact details and the cross-field rules
        let submitted = validate_form(kind, &data, today());
        assert_eq!(submitted.get("contactName"), Some(&ValidationError::Required));
        assert_eq!(submitted.get("email"), Some(&ValidationError::Required));
        assert_eq!(submitted.get("organization"), Some(&ValidationError::OrganizationRequired));
        assert_eq!(submitted.get("areaSize"), Some(&ValidationError::AreaTooSmall));
        assert!(!submitted.has_error("phone"));
    }

    // ========================================================================
    // Scroll animations
    // ========================================================================

    #[test]
    fn test_counter_runs_once_and_lands_on_its_text() {
        let mut started = OnceSet::new();
        let mut finals = Vec::new();

        // the same stat scrolls into view three times
        for _ in 0..3 {
            if !started.fire("impact-trees") {
                continue;
            }
            assert_eq!(
                ScrollAnimation::classify(true, false, None),
                ScrollAnimation::Counter
            );
            let mut counter = CounterAnimation::from_text("12,500+").unwrap();
            let mut frames = 0;
            loop {
                frames += 1;
                let (text, more) = counter.step();
                if !more {
                    finals.push(text);
                    break;
                }
                assert!(!text.ends_with('+'));
            }
            assert!(frames > 1);
            assert!(counter.is_finished());
            assert_eq!(counter.target(), 12_500);
        }

        assert_eq!(finals, vec!["12,500+".to_string()]);
        assert_eq!(started.len(), 1);
    }

    #[test]
    fn test_progress_fill_defaults_to_full_width() {
        assert_eq!(
            ScrollAnimation::classify(false, true, Some(" ")),
            ScrollAnimation::ProgressFill {
                width: "100".to_string()
            }
        );
        assert_eq!(
            ScrollAnimation::classify(false, true, Some("72")),
            ScrollAnimation::ProgressFill {
                width: "72".to_string()
            }
        );
        assert_eq!(ScrollAnimation::classify(false, false, Some("72")), ScrollAnimation::Class);
    }
}
