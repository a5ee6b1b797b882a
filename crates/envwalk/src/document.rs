//! Loosely typed document trees from serde_json, toml and serde_yaml.
//!
//! Their shape is only known at runtime, so each value reports the shape of
//! whichever variant it currently holds.

#[cfg(feature = "json")]
mod json {
    use serde_json::{Map, Value};

    use crate::{
        mapping::MapStorage,
        shape::{Shape, Substitute},
    };

    impl Substitute for Value {
        fn shape(&mut self) -> Shape<'_> {
            match self {
                Value::String(s) => Shape::String(s),
                Value::Array(items) => Shape::Sequence(items),
                Value::Object(map) => Shape::Mapping(map),
                Value::Null | Value::Bool(_) | Value::Number(_) => Shape::Opaque,
            }
        }
    }

    impl MapStorage for Map<String, Value> {
        type Key = String;
        type Value = Value;

        fn entry_count(&self) -> usize {
            self.len()
        }

        fn snapshot_keys(&self) -> Vec<String> {
            self.keys().cloned().collect()
        }

        fn fetch(&self, key: &String) -> Option<Value> {
            self.get(key).cloned()
        }

        fn store(&mut self, key: String, value: Value) {
            self.insert(key, value);
        }
    }

    impl Substitute for Map<String, Value> {
        fn shape(&mut self) -> Shape<'_> {
            Shape::Mapping(self)
        }
    }
}

#[cfg(feature = "toml")]
mod toml_doc {
    use toml::{Table, Value};

    use crate::{
        mapping::MapStorage,
        shape::{Shape, Substitute},
    };

    impl Substitute for Value {
        fn shape(&mut self) -> Shape<'_> {
            match self {
                Value::String(s) => Shape::String(s),
                Value::Array(items) => Shape::Sequence(items),
                Value::Table(table) => Shape::Mapping(table),
                Value::Integer(_) | Value::Float(_) | Value::Boolean(_) | Value::Datetime(_) => {
                    Shape::Opaque
                },
            }
        }
    }

    impl MapStorage for Table {
        type Key = String;
        type Value = Value;

        fn entry_count(&self) -> usize {
            self.len()
        }

        fn snapshot_keys(&self) -> Vec<String> {
            self.keys().cloned().collect()
        }

        fn fetch(&self, key: &String) -> Option<Value> {
            self.get(key).cloned()
        }

        fn store(&mut self, key: String, value: Value) {
            self.insert(key, value);
        }
    }

    impl Substitute for Table {
        fn shape(&mut self) -> Shape<'_> {
            Shape::Mapping(self)
        }
    }
}

#[cfg(feature = "yaml")]
mod yaml {
    use serde_yaml::{Mapping, Value};

    use crate::{
        mapping::MapStorage,
        shape::{Shape, Substitute},
    };

    impl Substitute for Value {
        fn shape(&mut self) -> Shape<'_> {
            match self {
                Value::String(s) => Shape::String(s),
                Value::Sequence(items) => Shape::Sequence(items),
                Value::Mapping(map) => Shape::Mapping(map),
                // `!Tag value` points at the tagged value.
                Value::Tagged(tagged) => Shape::Reference(Some(&mut tagged.value)),
                Value::Null | Value::Bool(_) | Value::Number(_) => Shape::Opaque,
            }
        }
    }

    impl MapStorage for Mapping {
        type Key = Value;
        type Value = Value;

        fn entry_count(&self) -> usize {
            self.len()
        }

        fn snapshot_keys(&self) -> Vec<Value> {
            self.keys().cloned().collect()
        }

        fn fetch(&self, key: &Value) -> Option<Value> {
            self.get(key).cloned()
        }

        fn store(&mut self, key: Value, value: Value) {
            self.insert(key, value);
        }
    }

    impl Substitute for Mapping {
        fn shape(&mut self) -> Shape<'_> {
            Shape::Mapping(self)
        }
    }
}
