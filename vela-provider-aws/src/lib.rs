//! Vela AWS Provider
//!
//! AWS provider plugin built on the Cloud Control API.
//!
//! ## Module Structure
//!
//! - `provider` - AwsProvider implementation
//! - `resources` - Resource type registrations
//! - `schemas` - Per-resource schema configurations
//! - `validators` - Attribute validators (ARN, CIDR, identifiers, ...)
//! - `waiter` - Bounded-retry status polling
//! - `partition` - Static partition lookup table
//! - `tags` - Tag conversion helpers

pub mod partition;
pub mod provider;
pub mod resources;
pub mod schemas;
pub mod tags;
pub mod validators;
pub mod waiter;

// Re-export main types
pub use provider::AwsProvider;
pub use validators::Validator;
pub use waiter::{Refresh, RefreshFn, StateWaiter, WaitError};

use vela_core::diagnostic::Diagnostic;
use vela_core::provider::{BoxFuture, Provider, ProviderResult};
use vela_core::resource::{Resource, ResourceId, State};

use resources::resource_types;

// =============================================================================
// Provider Trait Implementation
// =============================================================================

impl Provider for AwsProvider {
    fn name(&self) -> &'static str {
        "aws"
    }

    fn resource_types(&self) -> Vec<Box<dyn vela_core::provider::ResourceType>> {
        resource_types()
    }

    fn validate(&self, resource: &Resource) -> Vec<Diagnostic> {
        self.validate_resource(resource)
    }

    fn read(
        &self,
        id: &ResourceId,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.map(|s| s.to_string());
        Box::pin(async move {
            self.read_resource(&id.resource_type, &id.name, identifier.as_deref())
                .await
        })
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        Box::pin(async move { self.create_resource(resource).await })
    }

    fn update(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let from = from.clone();
        let to = to.clone();
        Box::pin(async move { self.update_resource(id, &identifier, &from, to).await })
    }

    fn delete(&self, id: &ResourceId, identifier: &str) -> BoxFuture<'_, ProviderResult<()>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        Box::pin(async move { self.delete_resource(&id, &identifier).await })
    }
}
