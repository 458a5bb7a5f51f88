#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn storage_unavailable_outside_browser() {
    let storage = BrowserStorage;
    assert!(matches!(storage.get("authToken"), Err(StorageError::Unavailable)));
    assert!(matches!(storage.set("authToken", "t"), Err(StorageError::Unavailable)));
    assert!(matches!(storage.remove("authToken"), Err(StorageError::Unavailable)));
}
