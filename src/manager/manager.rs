use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use super::managererror::ManagerError;

/// A registry of named objects built from JSON documents.
///
/// A document is either a single object or an array of objects; every object
/// is handed to [`IManager::insert_obj_from_json`].
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> &HashMap<String, V>;

    fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    fn names<'a>(&'a self) -> Vec<&'a str> where
        V: 'a {
        let mut names: Vec<&str> = self.map().keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    fn from_json_value(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        match json_value {
            serde_json::Value::Array(json_array) => self.insert_obj_from_json_vec(&json_array),
            json_object => self.insert_obj_from_json(json_object)
        }
    }

    fn from_reader<R: Read>(&mut self, reader: R) -> Result<(), ManagerError> where
        Self: Sized {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)
    }

    fn from_path<P: AsRef<Path>>(&mut self, file_path: P) -> Result<(), ManagerError> where
        Self: Sized {
        debug!(path = %file_path.as_ref().display(), "loading configuration");
        let file = File::open(file_path)?;
        self.from_reader(BufReader::new(file))
    }
}

/// Builds a named object from its JSON description.
pub type ObjFromJson<V> = fn(serde_json::Value) -> Result<(String, V), ManagerError>;

pub struct Manager<V> {
    map: HashMap<String, V>,
    get_obj_from_json: ObjFromJson<V>
}

impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: ObjFromJson<V>) -> Manager<V> {
        Manager { map: HashMap::new(), get_obj_from_json }
    }
}

impl<V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> &HashMap<String, V> {
        &self.map
    }

    fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let (name, v) = (self.get_obj_from_json)(json_value)?;
        debug!(name = %name, "registered");
        self.map.insert(name, v);
        Ok(())
    }
}
