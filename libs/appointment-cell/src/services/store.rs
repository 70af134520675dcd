use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use shared_database::KeyValueStore;

use crate::models::{Appointment, AppointmentError};

/// Ordered appointment list mirrored to a key-value store under one key.
///
/// Every mutation re-serializes the whole collection. The in-memory list only
/// changes once the backend write has succeeded.
pub struct AppointmentStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    appointments: RwLock<Vec<Appointment>>,
}

impl AppointmentStore {
    /// Missing, unreadable or corrupt data loads as an empty list.
    pub async fn load(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let appointments = match kv.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Appointment>>(&raw) {
                Ok(appointments) => appointments,
                Err(e) => {
                    warn!("Discarding corrupt appointment data under {:?}: {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read appointments from {} store: {}", kv.backend_name(), e);
                Vec::new()
            }
        };

        info!("Loaded {} appointments from {} store", appointments.len(), kv.backend_name());

        Self {
            kv,
            key,
            appointments: RwLock::new(appointments),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn list(&self) -> Vec<Appointment> {
        self.appointments.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.appointments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.appointments.read().await.is_empty()
    }

    pub async fn get(&self, appointment_id: &str) -> Option<Appointment> {
        self.appointments
            .read()
            .await
            .iter()
            .find(|a| a.id == appointment_id)
            .cloned()
    }

    pub async fn append(&self, appointment: Appointment) -> Result<(), AppointmentError> {
        self.append_checked(appointment, |_| Ok(())).await
    }

    /// Append after `check` accepts the current list, both under the write lock.
    pub async fn append_checked<F>(&self, appointment: Appointment, check: F) -> Result<(), AppointmentError>
    where
        F: FnOnce(&[Appointment]) -> Result<(), AppointmentError>,
    {
        let mut guard = self.appointments.write().await;
        check(&guard)?;

        let mut updated = guard.clone();
        updated.push(appointment);
        self.persist(&updated).await?;

        debug!("Appointment appended, {} stored", updated.len());
        *guard = updated;
        Ok(())
    }

    pub async fn remove(&self, appointment_id: &str) -> Result<Appointment, AppointmentError> {
        let mut guard = self.appointments.write().await;

        let position = guard
            .iter()
            .position(|a| a.id == appointment_id)
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))?;

        let mut updated = guard.clone();
        let removed = updated.remove(position);
        self.persist(&updated).await?;

        debug!("Appointment {} removed, {} stored", appointment_id, updated.len());
        *guard = updated;
        Ok(removed)
    }

    async fn persist(&self, appointments: &[Appointment]) -> Result<(), AppointmentError> {
        let raw = serde_json::to_string(appointments)?;
        self.kv.set(&self.key, &raw).await?;
        Ok(())
    }
}
