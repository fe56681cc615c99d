use memorytable::{table, Blank, Record};

#[derive(Debug, Clone, PartialEq, Record)]
#[record(key(fields(region, code)))]
#[record(key(fields(code), getter = identity))]
pub struct Airport {
    pub region: String,
    pub code: String,
    pub runways: u8,
}

#[derive(Debug, Clone, PartialEq, Record, Blank)]
#[record(key(fields(value)))]
pub struct Wrapper<T: Clone> {
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Blank)]
pub struct Marker;

fn airport(region: &str, code: &str) -> Airport {
    Airport {
        region: region.to_string(),
        code: code.to_string(),
        runways: 1,
    }
}

#[test]
pub fn test_generated_getters() {
    let ams = airport("eu", "AMS");

    assert_eq!(Airport::identity(&ams), "AMS");
    assert_eq!(
        Airport::by_region_code(&ams),
        ("eu".to_string(), "AMS".to_string())
    );
}

#[test]
pub fn test_getters_as_identity_functions() {
    let table = table![airport("eu", "AMS"), airport("us", "AMS"), airport("eu", "LHR")];

    assert_eq!(table.unique(Airport::identity).count(), 2);
    assert_eq!(table.unique(Airport::by_region_code).count(), 3);
}

#[test]
pub fn test_generic_record() {
    let table = table![Wrapper { value: 0u32 }, Wrapper { value: 3 }];

    assert_eq!(Wrapper::by_value(&table.to_slice()[1]), 3);
    assert_eq!(table.filter_empty().to_slice(), &[Wrapper { value: 3 }]);
}

#[test]
pub fn test_unit_struct_is_blank() {
    assert!(Marker.is_blank());
}
