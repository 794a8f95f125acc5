use palette_scales::{Error, LookupKind};
use palette_scales::hex::{HexAccessor, NestedHexAccessor};
use palette_scales::palette::{PaletteCollection, PaletteSource, RampOptions,
                              SinglePalette};
use palette_scales::scale::{Aesthetic, CollectionScale, ScaleOptions,
                            SingleScale, CONTINUOUS_STEPS};

const BRAND: [(&str, &str); 3] =
    [("red", "#701B06"), ("blue", "#78A8D1"), ("yellow", "#D5BF98")];

#[test]
fn brand_colors_by_name() {
    let hex = HexAccessor::new(BRAND).unwrap();
    assert_eq!(hex.get(&["yellow", "blue", "red"]).unwrap(),
               ["#D5BF98", "#78A8D1", "#701B06"]);
    match hex.get(&["green"]) {
        Err(Error::Lookup { kind: LookupKind::Color, missing }) =>
            assert_eq!(missing, ["green"]),
        r => panic!("unexpected {r:?}"),
    }
}

#[test]
fn palette_collection_lookup() {
    let pals = PaletteCollection::new([("p1", ["#000000", "#FFFFFF"])])
        .unwrap();
    let ramp = pals.ramp("p1", &RampOptions::default()).unwrap();
    assert_eq!(ramp.colors(2), ["#000000", "#FFFFFF"]);
    assert!(matches!(pals.ramp("missing", &RampOptions::default()),
                     Err(Error::Lookup { kind: LookupKind::Palette, .. })));
}

#[test]
fn invalid_input_fails_at_construction() {
    assert!(matches!(HexAccessor::new([("bad", "not-a-color")]),
                     Err(Error::Config(_))));
    assert!(matches!(SinglePalette::new(["#000000", "not-a-color"]),
                     Err(Error::Config(_))));
    assert!(matches!(PaletteSource::collection([("", ["#000000"])]),
                     Err(Error::Config(_))));
    assert!(matches!(NestedHexAccessor::new([("p", [("", "#000000")])]),
                     Err(Error::Config(_))));
}

#[test]
fn from_brand_colors_to_scales() {
    let hex = HexAccessor::new(BRAND).unwrap();
    let pal = SinglePalette::new(hex.get(&["red", "yellow", "blue"]).unwrap())
        .unwrap();

    let colour = SingleScale::color(pal.clone())
        .build(&ScaleOptions::default()).unwrap();
    assert_eq!(colour.aesthetic(), Aesthetic::Colour);
    assert_eq!(colour.colors(3), ["#701B06", "#D5BF98", "#78A8D1"]);

    let fill = SingleScale::fill(pal)
        .build(&ScaleOptions::default().discrete(false)
               .ramp(RampOptions::default().reverse(true))
               .extra("name", "Share"))
        .unwrap();
    assert_eq!(fill.aesthetic(), Aesthetic::Fill);
    let gradient = fill.gradient().unwrap();
    assert_eq!(gradient.len(), CONTINUOUS_STEPS);
    assert_eq!(gradient.first().map(String::as_str), Some("#78A8D1"));
    assert_eq!(gradient.last().map(String::as_str), Some("#701B06"));
    let extra = fill.extra().unwrap();
    assert_eq!(extra.get("name").map(String::as_str), Some("Share"));
}

#[test]
fn collection_scale_defaults_to_first_palette() {
    let pals = PaletteCollection::new([
        ("warm", vec!["#701B06", "#D5BF98"]),
        ("cold", vec!["#78A8D1"]),
    ]).unwrap();
    let s = CollectionScale::color(pals).build(None, &ScaleOptions::default())
        .unwrap();
    assert_eq!(s.colors(2), ["#701B06", "#D5BF98"]);
}

#[test]
fn factories_are_shareable_across_threads() {
    let hex = std::sync::Arc::new(HexAccessor::new(BRAND).unwrap());
    let handles: Vec<_> = (0 .. 4).map(|_| {
        let hex = hex.clone();
        std::thread::spawn(move || hex.get(&["blue"]).unwrap())
    }).collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), ["#78A8D1"]);
    }
}
