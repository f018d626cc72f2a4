//! JSON 文件约会仓库
//!
//! 文件内容是一个扁平对象：`{ "date-<millis>": "text", ... }`。
//! 打开时整体读入内存，每次 `set` / `delete` 后整体写回。

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CalendarError, CalendarResult};
use crate::traits::AppointmentStore;
use crate::types::DateId;

/// 基于 JSON 文件的约会仓库
#[derive(Debug)]
pub struct JsonFileAppointmentStore {
    path: PathBuf,
    /// 内存缓存（保留无法识别的键，写回时不丢失）
    cache: BTreeMap<String, String>,
}

impl JsonFileAppointmentStore {
    /// 打开（文件不存在视为空仓库）
    pub fn open(path: impl Into<PathBuf>) -> CalendarResult<Self> {
        let path = path.into();
        let cache = Self::load_from_file(&path)?;
        log::debug!("Loaded {} appointments from {}", cache.len(), path.display());
        Ok(Self { path, cache })
    }

    /// 数据文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// 从文件加载
    fn load_from_file(path: &Path) -> CalendarResult<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let entries: BTreeMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| CalendarError::Serialization(format!("{}: {e}", path.display())))?;

        for key in entries.keys().filter(|key| !is_canonical_key(key)) {
            log::warn!("Ignoring unrecognized key in appointment file: {key}");
        }

        Ok(entries)
    }

    /// 保存到文件（先写临时文件再替换）
    fn save_to_file(&self) -> CalendarResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.cache)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

/// 键能被解析，且与重新生成的键完全一致（`date-05`、`date-+5` 都不算）
fn is_canonical_key(key: &str) -> bool {
    DateId::from_storage_key(key).is_some_and(|id| id.to_storage_key() == key)
}

impl AppointmentStore for JsonFileAppointmentStore {
    fn get(&self, id: &DateId) -> CalendarResult<Option<String>> {
        Ok(self.cache.get(&id.to_storage_key()).cloned())
    }

    fn set(&mut self, id: &DateId, text: &str) -> CalendarResult<()> {
        let previous = self.cache.insert(id.to_storage_key(), text.to_string());
        if let Err(e) = self.save_to_file() {
            // 写盘失败时回滚缓存
            match previous {
                Some(old) => self.cache.insert(id.to_storage_key(), old),
                None => self.cache.remove(&id.to_storage_key()),
            };
            return Err(e);
        }
        Ok(())
    }

    fn delete(&mut self, id: &DateId) -> CalendarResult<bool> {
        let Some(previous) = self.cache.remove(&id.to_storage_key()) else {
            return Ok(false);
        };
        if let Err(e) = self.save_to_file() {
            self.cache.insert(id.to_storage_key(), previous);
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonFileAppointmentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileAppointmentStore::open(dir.path().join("appointments.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_file_opens_empty() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn set_persists_across_reopen() {
        let (dir, mut store) = temp_store();
        let id = DateId::from_millis(1_704_067_200_000);
        store.set(&id, "dentist at 3").unwrap();

        let reopened = JsonFileAppointmentStore::open(dir.path().join("appointments.json")).unwrap();
        assert_eq!(reopened.get(&id).unwrap().as_deref(), Some("dentist at 3"));
    }

    #[test]
    fn file_uses_date_prefixed_keys() {
        let (_dir, mut store) = temp_store();
        store.set(&DateId::from_millis(86_400_000), "x").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("date-86400000").map(String::as_str), Some("x"));
    }

    #[test]
    fn delete_persists_across_reopen() {
        let (dir, mut store) = temp_store();
        let id = DateId::from_millis(1);
        store.set(&id, "dentist").unwrap();
        assert!(store.delete(&id).unwrap());
        assert!(!store.delete(&id).unwrap());

        let reopened = JsonFileAppointmentStore::open(dir.path().join("appointments.json")).unwrap();
        assert!(reopened.get(&id).unwrap().is_none());
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("appointments.json");
        let mut store = JsonFileAppointmentStore::open(&path).unwrap();
        store.set(&DateId::from_millis(1), "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unknown_keys_survive_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut store = JsonFileAppointmentStore::open(&path).unwrap();
        store.set(&DateId::from_millis(1), "x").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\""));
        assert!(raw.contains("\"date-1\""));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileAppointmentStore::open(&path).unwrap_err();
        assert!(matches!(err, CalendarError::Serialization(_)));
    }

    #[test]
    fn only_canonical_keys_are_recognized() {
        assert!(is_canonical_key("date-5"));
        assert!(is_canonical_key("date--86400000"));
        assert!(!is_canonical_key("date-05"));
        assert!(!is_canonical_key("date-+5"));
        assert!(!is_canonical_key("theme"));
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let (dir, mut store) = temp_store();
        let id = DateId::from_millis(1);
        let other = DateId::from_millis(2);
        store.set(&id, "dentist").unwrap();

        // 临时文件的位置被目录占住，写盘必然失败
        fs::create_dir(dir.path().join("appointments.json.tmp")).unwrap();

        assert!(store.set(&id, "gym").is_err());
        assert_eq!(store.get(&id).unwrap().as_deref(), Some("dentist"));

        assert!(store.set(&other, "lunch").is_err());
        assert!(store.get(&other).unwrap().is_none());

        assert!(store.delete(&id).is_err());
        assert_eq!(store.get(&id).unwrap().as_deref(), Some("dentist"));

        let reopened = JsonFileAppointmentStore::open(dir.path().join("appointments.json")).unwrap();
        assert_eq!(reopened.get(&id).unwrap().as_deref(), Some("dentist"));
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn empty_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        fs::write(&path, "").unwrap();
        assert!(JsonFileAppointmentStore::open(&path).unwrap().is_empty());
    }
}
