use async_trait::async_trait;
use contatos_mcp_server::error::{ContactStoreError, ContactStoreResult};
use contatos_mcp_server::models::Contact;
use contatos_mcp_server::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// In-memory store with sequential ids. Tracks method calls and can be
/// switched into a failing mode to exercise error paths.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<i64, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<AtomicI64>,
    failing: Arc<AtomicBool>,
    failing_methods: Arc<Mutex<HashSet<String>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(BTreeMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            failing: Arc::new(AtomicBool::new(false)),
            failing_methods: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Add a contact, assigning an id when it has none. Returns the id.
    pub fn add_contact(&self, contact: Contact) -> i64 {
        let id = contact
            .id
            .unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::SeqCst));
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);

        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(id, contact.with_id(id));
        id
    }

    /// Stored contact by id, bypassing call tracking.
    pub fn stored(&self, id: i64) -> Option<Contact> {
        self.contacts.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Make every following call fail with a 500 ApiError.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make only `method` fail with a Timeout, leaving the others working.
    pub fn fail_method(&self, method: &str) {
        self.failing_methods
            .lock()
            .unwrap()
            .insert(method.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) -> ContactStoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing_methods.lock().unwrap().contains(method) {
            return Err(ContactStoreError::Timeout);
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ContactStoreError::ApiError {
                status: 500,
                message: "store unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(id: i64) -> ContactStoreError {
        ContactStoreError::NotFound(format!("Contact {} not found", id))
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(&self) -> ContactStoreResult<Vec<Contact>> {
        self.track_call("list")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> ContactStoreResult<Contact> {
        self.track_call("get")?;

        let contacts = self.contacts.lock().unwrap();
        contacts.get(&id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, contact: &Contact) -> ContactStoreResult<Contact> {
        self.track_call("create")?;

        // Give a concurrent caller the chance to run, as a real round trip would.
        tokio::task::yield_now().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = contact.clone().with_id(id);
        self.contacts.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, contact: &Contact) -> ContactStoreResult<Contact> {
        self.track_call("update")?;

        let mut contacts = self.contacts.lock().unwrap();
        if !contacts.contains_key(&id) {
            return Err(Self::not_found(id));
        }
        let updated = contact.clone().with_id(id);
        contacts.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ContactStoreResult<()> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}
