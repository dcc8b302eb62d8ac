use seabattle::{CustomParams, ParamsError};

#[test]
fn test_parse_and_take_typed_values() {
    let mut params =
        CustomParams::parse("max_eclipse_tradeoff=3:min_eclipse_trick=false").unwrap();
    assert_eq!(params.take::<u16>("max_eclipse_tradeoff").unwrap(), Some(3));
    assert_eq!(params.take::<bool>("min_eclipse_trick").unwrap(), Some(false));
    params.finish().unwrap();
}

#[test]
fn test_absent_key_is_none() {
    let mut params = CustomParams::parse("a=1").unwrap();
    assert_eq!(params.take::<u16>("b").unwrap(), None);
    assert_eq!(params.take::<u16>("a").unwrap(), Some(1));
    params.finish().unwrap();
}

#[test]
fn test_empty_string_and_separators() {
    let params = CustomParams::parse("").unwrap();
    params.finish().unwrap();

    // stray separators are tolerated, entries between them are not
    let params = CustomParams::parse("::").unwrap();
    params.finish().unwrap();
}

#[test]
fn test_malformed_entry() {
    assert_eq!(
        CustomParams::parse("justakey").unwrap_err(),
        ParamsError::Malformed {
            entry: "justakey".into()
        }
    );
    assert_eq!(
        CustomParams::parse("=5").unwrap_err(),
        ParamsError::Malformed { entry: "=5".into() }
    );
}

#[test]
fn test_bad_value_names_key_and_value() {
    let mut params = CustomParams::parse("count=many").unwrap();
    assert_eq!(
        params.take::<u16>("count").unwrap_err(),
        ParamsError::BadValue {
            key: "count".into(),
            value: "many".into()
        }
    );
}

#[test]
fn test_leftover_key_is_unknown() {
    let mut params = CustomParams::parse("known=1:mystery=2").unwrap();
    assert_eq!(params.take::<u16>("known").unwrap(), Some(1));
    assert_eq!(
        params.finish().unwrap_err(),
        ParamsError::UnknownKey {
            key: "mystery".into()
        }
    );
}

#[test]
fn test_float_values_parse() {
    let mut params = CustomParams::parse("score_deviation=0.05").unwrap();
    assert_eq!(params.take::<f32>("score_deviation").unwrap(), Some(0.05));
    params.finish().unwrap();
}
