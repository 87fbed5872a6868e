use device_catalog::{
    AnyDevice, Appliance, Band, CatalogError, Device, ErrorKind, Locale, RadioReceiver,
    Television,
};

fn sample_devices() -> Vec<AnyDevice> {
    vec![
        Device::default().into(),
        Television::default().into(),
        RadioReceiver::default().into(),
    ]
}

#[test]
fn test_constructed_values_are_returned_trimmed() {
    let tv = Television::builder()
        .brand(" Samsung ")
        .model("Q80")
        .color("Black ")
        .price(80000.0)
        .screen_size_inches(55)
        .resolution(" 4K")
        .smart(true)
        .panel_type("QLED")
        .build()
        .unwrap();

    assert_eq!(tv.brand(), "Samsung");
    assert_eq!(tv.model(), "Q80");
    assert_eq!(tv.color(), "Black");
    assert_eq!(tv.price(), 80000.0);
    assert_eq!(tv.screen_size_inches(), 55);
    assert_eq!(tv.resolution(), "4K");
    assert!(tv.is_smart());
    assert_eq!(tv.panel_type(), "QLED");

    let radio = RadioReceiver::builder()
        .brand("Pioneer")
        .model("DEH-X8800BHS")
        .color("Black")
        .price(15000.0)
        .band("am/fm")
        .frequency_range(87.5, 108.0)
        .rds(true)
        .build()
        .unwrap();

    assert_eq!(radio.brand(), "Pioneer");
    assert_eq!(radio.model(), "DEH-X8800BHS");
    assert_eq!(radio.price(), 15000.0);
    assert_eq!(radio.band(), Band::AmFm);
    assert_eq!(radio.band().to_string(), "AM/FM");
    assert_eq!(radio.min_frequency_mhz(), 87.5);
    assert_eq!(radio.max_frequency_mhz(), 108.0);
    assert!(radio.has_rds());
}

#[test]
fn test_blank_base_strings_rejected_for_every_kind() {
    for mut device in sample_devices() {
        for blank in ["", "   ", "\t\n"] {
            let base = device.base_mut();
            assert_eq!(base.set_brand(blank).unwrap_err().kind(), ErrorKind::InvalidArgument);
            assert_eq!(base.set_model(blank).unwrap_err().kind(), ErrorKind::InvalidArgument);
            assert_eq!(base.set_color(blank).unwrap_err().kind(), ErrorKind::InvalidArgument);
            assert_eq!(
                device.update_color(blank).unwrap_err().kind(),
                ErrorKind::InvalidArgument
            );
        }
        assert_eq!(device.brand(), "Generic");
        assert_eq!(device.color(), "Black");
    }
}

#[test]
fn test_price_bounds_for_every_kind() {
    for mut device in sample_devices() {
        let err = device.update_price(-100.0).unwrap_err();
        assert!(matches!(err, CatalogError::OutOfRange { field: "price", .. }));

        for price in [0.0, 0.01, 499.99, 1_000_000.0] {
            device.update_price(price).unwrap();
            assert_eq!(device.price(), price);
        }
        assert_eq!(
            device.base_mut().set_price(1_000_000.5).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }
}

#[test]
fn test_update_frequency_range() {
    let mut radio = RadioReceiver::builder()
        .brand("Kenwood")
        .model("KDC-X502")
        .price(8000.0)
        .frequency_range(87.5, 108.0)
        .rds(false)
        .build()
        .unwrap();

    radio.update_frequency_range(88.0, 107.5).unwrap();
    assert_eq!(radio.min_frequency_mhz(), 88.0);
    assert_eq!(radio.max_frequency_mhz(), 107.5);

    let err = radio.update_frequency_range(100.0, 90.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_band_updates() {
    let mut radio = RadioReceiver::default();
    for (input, expected) in [("AM", "AM"), ("fm", "FM"), ("Am/Fm", "AM/FM"), ("dab", "DAB")] {
        radio.update_band(input).unwrap();
        assert_eq!(radio.band().as_str(), expected);
    }

    assert_eq!(radio.set_band("Invalid").unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(radio.set_band(" ").unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(radio.band(), Band::Dab);
}

#[test]
fn test_television_description() {
    let tv = Television::builder()
        .brand("Sony")
        .model("Bravia")
        .color("Black")
        .price(120000.0)
        .screen_size_inches(55)
        .resolution("4K")
        .smart(true)
        .panel_type("OLED")
        .build()
        .unwrap();

    let text = tv.describe();
    assert!(text.contains("Sony Bravia"));
    assert!(text.contains("55"));
    assert!(text.contains("4K"));
    assert!(text.contains("smart: yes"));
    assert!(text.contains("OLED"));
    assert!(text.contains("120000"));
}

#[test]
fn test_radio_description() {
    let radio = RadioReceiver::builder()
        .brand("Alpine")
        .model("CDE-172BT")
        .color("Black")
        .price(12000.0)
        .band("AM/FM")
        .frequency_range(87.5, 108.0)
        .rds(true)
        .build()
        .unwrap();

    let text = radio.describe();
    assert!(text.contains("Alpine CDE-172BT"));
    assert!(text.contains("AM/FM"));
    assert!(text.contains("87.5"));
    assert!(text.contains("108"));
    assert!(text.contains("RDS: yes"));

    let text = radio.describe_in(Locale::Ru);
    assert!(text.contains("Радиоприемник: Alpine CDE-172BT"));
    assert!(text.contains("RDS: да"));
}

#[test]
fn test_dispatch_through_any_device() {
    let entries = sample_devices();
    let texts: Vec<String> = entries.iter().map(|d| d.describe()).collect();

    assert!(texts[0].starts_with("Device:"));
    assert!(texts[1].contains("32\" 1080p"));
    assert!(texts[2].contains("87.5-108 MHz"));
}

#[test]
fn test_getters_are_idempotent() {
    let radio = RadioReceiver::default();
    assert_eq!(radio.band(), radio.band());
    assert_eq!(radio.min_frequency_mhz(), radio.min_frequency_mhz());
    assert_eq!(radio.describe(), radio.describe());

    let tv = Television::default();
    assert_eq!(tv.resolution(), tv.resolution());
    assert_eq!(tv.price(), tv.price());
}
