use super::*;

#[test]
fn every_preset_has_five_normalized_colors() {
    for preset in PalettePreset::ALL {
        let colors = preset.colors();
        assert_eq!(colors.len(), 5, "{preset}");
        assert!(colors.iter().all(|c| c.is_normalized()), "{preset}");
    }
}

#[test]
fn hex_presets_decode_exactly() {
    assert_eq!(PalettePreset::Fruity.colors()[0].to_rgb8(), [0xff, 0x4c, 0x4c]);
    assert_eq!(PalettePreset::Mist.colors()[4].to_rgb8(), [0xc6, 0xde, 0xf1]);
}

#[test]
fn names_round_trip_through_from_str() {
    for preset in PalettePreset::ALL {
        assert_eq!(preset.name().parse::<PalettePreset>().unwrap(), preset);
    }
    assert_eq!(
        "Mono_Blue".parse::<PalettePreset>().unwrap(),
        PalettePreset::MonoBlue
    );
    let err = "plaid".parse::<PalettePreset>().unwrap_err();
    assert!(err.to_string().contains("soft-pastel"));
}

#[test]
fn serde_uses_kebab_case() {
    let json = serde_json::to_string(&PalettePreset::SoftPastel).unwrap();
    assert_eq!(json, "\"soft-pastel\"");
    let back: PalettePreset = serde_json::from_str("\"mono-blue\"").unwrap();
    assert_eq!(back, PalettePreset::MonoBlue);
}

#[test]
fn hex_presets_match_their_hex_codes() {
    let cases: [(PalettePreset, [&str; 5]); 4] = [
        (PalettePreset::Spring, ["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF"]),
        (PalettePreset::Blush, ["#F7C8E0", "#FFDDCC", "#FFE6EB", "#D6F5F5", "#C9E4FF"]),
        (PalettePreset::Mist, ["#FDE2E4", "#FAD2E1", "#E2ECE9", "#BEE1E6", "#C6DEF1"]),
        (PalettePreset::Fruity, ["#FF4C4C", "#FFD93D", "#6BCB77", "#4D96FF", "#FF6F91"]),
    ];
    for (preset, codes) in cases {
        let want: Vec<Rgb> = codes.iter().map(|c| Rgb::from_hex(c).unwrap()).collect();
        assert_eq!(preset.colors(), want, "{preset}");
    }
}
