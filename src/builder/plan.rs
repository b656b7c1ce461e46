//! Per-kind request builders and the ordered import plan.

use serde::Serialize;
use tracing::info;

use super::authors::author_drafts;
use super::content::{page_drafts, post_drafts};
use super::destination::Destination;
use super::menus::menu_drafts;
use super::request::{CreateRequest, EntityKind, RequestGroup};
use super::targets::TargetIndex;
use super::terms::{category_drafts, tag_drafts};
use crate::model::ImportBundle;

/// Builds creation requests for one bundle.
///
/// Every method is pure over the bundle and the target index; kinds share
/// no state and can be built in any order.
pub struct RequestBuilder<'b, D: Destination> {
    bundle: &'b ImportBundle,
    destination: D,
    targets: TargetIndex,
}

/// Menu requests, items first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuRequests {
    pub items: Vec<CreateRequest>,
    pub menus: Vec<CreateRequest>,
}

impl MenuRequests {
    /// Items followed by menus.
    pub fn into_ordered(self) -> Vec<CreateRequest> {
        let mut requests = self.items;
        requests.extend(self.menus);
        requests
    }
}

impl<'b, D: Destination> RequestBuilder<'b, D> {
    pub fn new(bundle: &'b ImportBundle, destination: D) -> Self {
        Self {
            bundle,
            destination,
            targets: TargetIndex::new(),
        }
    }

    pub fn with_targets(mut self, targets: TargetIndex) -> Self {
        self.targets = targets;
        self
    }

    pub fn tag_requests(&self) -> Vec<CreateRequest> {
        tag_drafts(self.bundle)
            .iter()
            .map(|draft| self.destination.tag(draft))
            .collect()
    }

    pub fn category_requests(&self) -> Vec<CreateRequest> {
        category_drafts(self.bundle)
            .iter()
            .map(|draft| self.destination.category(draft))
            .collect()
    }

    pub fn post_requests(&self) -> Vec<CreateRequest> {
        post_drafts(self.bundle)
            .iter()
            .map(|draft| self.destination.post(draft))
            .collect()
    }

    pub fn page_requests(&self) -> Vec<CreateRequest> {
        page_drafts(self.bundle)
            .iter()
            .map(|draft| self.destination.page(draft))
            .collect()
    }

    pub fn author_requests(&self) -> Vec<CreateRequest> {
        author_drafts(self.bundle)
            .iter()
            .map(|draft| self.destination.author(draft))
            .collect()
    }

    pub fn menu_requests(&self) -> MenuRequests {
        let drafts = menu_drafts(self.bundle, &self.targets);
        MenuRequests {
            items: drafts
                .items
                .iter()
                .map(|draft| self.destination.menu_item(draft))
                .collect(),
            menus: drafts
                .menus
                .iter()
                .map(|draft| self.destination.menu(draft))
                .collect(),
        }
    }

    /// Requests for the selected kinds, grouped in execution order.
    ///
    /// Selecting menus also selects menu items, since a menu lists its
    /// items by name. Duplicate kinds in `selection` are ignored.
    pub fn plan(&self, selection: &[EntityKind]) -> ImportPlan {
        let selected = |kind: EntityKind| {
            selection.contains(&kind)
                || (kind == EntityKind::MenuItems && selection.contains(&EntityKind::Menus))
        };

        let mut menus = None;
        let mut groups = Vec::new();
        for &kind in EntityKind::all() {
            if !selected(kind) {
                continue;
            }
            let requests = match kind {
                EntityKind::Tags => self.tag_requests(),
                EntityKind::Categories => self.category_requests(),
                EntityKind::Posts => self.post_requests(),
                EntityKind::Pages => self.page_requests(),
                EntityKind::Authors => self.author_requests(),
                EntityKind::MenuItems => menus
                    .get_or_insert_with(|| self.menu_requests())
                    .items
                    .clone(),
                EntityKind::Menus => menus
                    .get_or_insert_with(|| self.menu_requests())
                    .menus
                    .clone(),
            };
            groups.push(RequestGroup { kind, requests });
        }

        let plan = ImportPlan { groups };
        info!(
            groups = plan.groups.len(),
            requests = plan.len(),
            "import plan built"
        );
        plan
    }
}

/// Request groups in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportPlan {
    pub groups: Vec<RequestGroup>,
}

impl ImportPlan {
    /// Total number of requests.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.requests.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn group(&self, kind: EntityKind) -> Option<&RequestGroup> {
        self.groups.iter().find(|group| group.kind == kind)
    }

    /// Every request, flattened in execution order.
    pub fn requests(&self) -> impl Iterator<Item = &CreateRequest> {
        self.groups.iter().flat_map(|group| group.requests.iter())
    }
}
