use indexmap::IndexMap;
use rdl_structs::types::{PropertyType, PropertyValue, StructRef, StructType};
use tracing_subscriber::EnvFilter;

#[allow(unused)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(unused)]
pub fn members<const N: usize>(
    members: [(&str, PropertyType); N],
) -> IndexMap<String, PropertyType> {
    members
        .into_iter()
        .map(|(name, ty)| (name.to_string(), ty))
        .collect()
}

#[allow(unused)]
pub fn values<const N: usize>(
    values: [(&str, PropertyValue); N],
) -> IndexMap<String, PropertyValue> {
    values
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// An abstract `Base` with no members and a concrete `Point { x, y }` derived from it.
#[allow(unused)]
pub fn base_and_point() -> (StructRef, StructRef) {
    let base = StructType::root()
        .derive("Base", IndexMap::new(), true)
        .expect("failed to derive Base");
    let point = base
        .derive(
            "Point",
            members([("x", PropertyType::Longint), ("y", PropertyType::Longint)]),
            false,
        )
        .expect("failed to derive Point");
    (base, point)
}
