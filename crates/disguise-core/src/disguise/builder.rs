//! DisguiseBuilder -- accumulates a name, an entity and a pending skin.
//!
//! Skin setters start the lookup immediately and keep its future; `build()`
//! chains the final assembly onto that future. When no lookup is pending the
//! held future is already resolved and `build()` completes on first poll.

use std::fmt;
use std::future::Future;

use futures_util::FutureExt;
use futures_util::future;
use tokio::runtime::Handle;

use disguise_types::entity::{Entity, EntityBuilder, EntityType};
use disguise_types::error::SkinError;
use disguise_types::skin::Skin;

use super::Disguise;
use crate::skin::{SkinApi, SkinContext, SkinFuture};

/// Builder for [`Disguise`].
///
/// Setters take and return the builder by value; the builder is consumed by
/// [`build`](Self::build). Setting a second skin source replaces the pending
/// lookup. A lookup already running on the runtime is not cancelled, its
/// result is just never observed.
pub struct DisguiseBuilder {
    name: Option<String>,
    entity: Option<Entity>,
    pending_skin: SkinFuture,
}

impl DisguiseBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            entity: None,
            pending_skin: resolved(Skin::empty()),
        }
    }

    /// Display name, stored verbatim (an empty string counts as no name).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use an already known skin; no lookup is performed.
    pub fn skin(mut self, skin: Skin) -> Self {
        self.pending_skin = resolved(skin);
        self
    }

    pub fn skin_texture(self, texture: impl Into<String>, signature: impl Into<String>) -> Self {
        self.skin(Skin::new(texture, signature))
    }

    /// Look the skin up through `api`, keyed by `value`.
    pub fn skin_from<V>(mut self, api: &SkinApi<V>, value: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        self.pending_skin = start_lookup(api.of(value));
        self
    }

    /// Look the skin up through `api` with a caller-supplied context.
    pub fn skin_from_context<V, C>(mut self, api: &SkinApi<V>, context: C) -> Self
    where
        V: Send + Sync + 'static,
        C: SkinContext<V> + 'static,
    {
        self.pending_skin = start_lookup(api.of_context(context));
        self
    }

    /// Use an arbitrary pending lookup as the skin source.
    pub fn skin_future(mut self, lookup: SkinFuture) -> Self {
        self.pending_skin = start_lookup(lookup);
        self
    }

    pub fn entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Configure a fresh [`EntityBuilder`] and use the entity it builds.
    pub fn entity_with(self, configure: impl FnOnce(EntityBuilder) -> EntityBuilder) -> Self {
        let entity = configure(EntityBuilder::new()).build();
        self.entity(entity)
    }

    pub fn entity_type(self, entity_type: EntityType) -> Self {
        self.entity_with(|b| b.entity_type(entity_type))
    }

    /// Wait for the pending skin, then assemble the disguise.
    ///
    /// Fails with the lookup's error if the lookup fails; no disguise is
    /// produced in that case.
    pub fn build(self) -> impl Future<Output = Result<Disguise, SkinError>> + Send + 'static {
        let Self {
            name,
            entity,
            pending_skin,
        } = self;
        pending_skin.map(move |skin| skin.map(|skin| Disguise::new(name, skin, entity)))
    }
}

impl Default for DisguiseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DisguiseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisguiseBuilder")
            .field("name", &self.name)
            .field("entity", &self.entity)
            .finish_non_exhaustive()
    }
}

fn resolved(skin: Skin) -> SkinFuture {
    Box::pin(future::ready(Ok(skin)))
}

/// Start `lookup` eagerly when a Tokio runtime is available; otherwise keep
/// it lazy so `build()` drives it.
fn start_lookup(lookup: SkinFuture) -> SkinFuture {
    let Ok(handle) = Handle::try_current() else {
        return lookup;
    };
    let task = handle.spawn(lookup);
    Box::pin(async move {
        match task.await {
            Ok(result) => result,
            Err(e) => Err(SkinError::Task(e.to_string())),
        }
    })
}
