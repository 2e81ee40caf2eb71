mod tests {
    use myrtio_ws2812::{
        Command, CommandError, EffectEngine, EffectKind, LightRequest, RawRequest, Rgb,
    };

    #[test]
    fn test_full_request_is_validated() {
        let color = [1, 2, 3];
        let request = LightRequest::from_raw(&RawRequest {
            effect: Some(2),
            effect_speed: Some(0),
            color: Some(&color),
            brightness: Some(255),
        })
        .unwrap();

        assert_eq!(
            request,
            LightRequest {
                effect: Some(EffectKind::RainbowCycle),
                effect_speed: Some(0),
                color: Some(Rgb::new(1, 2, 3)),
                brightness: Some(255),
            }
        );
    }

    #[test]
    fn test_empty_request() {
        let request = LightRequest::from_raw(&RawRequest::default()).unwrap();
        assert!(request.is_empty());
        assert_eq!(request.commands().count(), 0);
    }

    #[test]
    fn test_unknown_effect_rejected() {
        for effect in [3, -1, 256] {
            let result = LightRequest::from_raw(&RawRequest {
                effect: Some(effect),
                ..RawRequest::default()
            });
            assert_eq!(result, Err(CommandError::UnknownEffect(effect)));
        }
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let speed = LightRequest::from_raw(&RawRequest {
            effect_speed: Some(256),
            ..RawRequest::default()
        });
        assert_eq!(speed, Err(CommandError::SpeedOutOfRange(256)));

        let brightness = LightRequest::from_raw(&RawRequest {
            brightness: Some(-5),
            ..RawRequest::default()
        });
        assert_eq!(brightness, Err(CommandError::BrightnessOutOfRange(-5)));
    }

    #[test]
    fn test_color_shape_rejected() {
        let short = [1, 2];
        let long = [1, 2, 3, 4];
        let out_of_range = [0, 300, 0];

        let check = |color: &[i64]| {
            LightRequest::from_raw(&RawRequest {
                color: Some(color),
                ..RawRequest::default()
            })
        };

        assert_eq!(check(&short), Err(CommandError::ColorArity(2)));
        assert_eq!(check(&long), Err(CommandError::ColorArity(4)));
        assert_eq!(check(&[]), Err(CommandError::ColorArity(0)));
        assert_eq!(check(&out_of_range), Err(CommandError::ColorOutOfRange(300)));
    }

    #[test]
    fn test_commands_follow_application_order() {
        let request = LightRequest {
            effect: Some(EffectKind::Rainbow),
            effect_speed: Some(7),
            color: Some(Rgb::new(0, 0, 9)),
            brightness: Some(40),
        };

        let commands: Vec<Command> = request.commands().collect();
        assert_eq!(
            commands,
            vec![
                Command::SetSpeed(7),
                Command::SetColor(Rgb::new(0, 0, 9)),
                Command::SetBrightness(40),
                Command::SetEffect(EffectKind::Rainbow),
            ]
        );
    }

    #[test]
    fn test_effect_in_request_overrides_color_target() {
        let mut engine = EffectEngine::default();
        engine.apply(&LightRequest {
            effect: Some(EffectKind::Rainbow),
            color: Some(Rgb::new(0, 0, 9)),
            ..LightRequest::default()
        });

        assert_eq!(engine.effect(), EffectKind::Rainbow);
        assert_eq!(engine.target_color(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_single_command_request() {
        let request = LightRequest::from(Command::SetBrightness(3));
        assert_eq!(request.brightness, Some(3));
        assert_eq!(request.effect, None);
    }
}
