use crate::app::action::{action_for_visual, Action};
use crate::route::codec::decode;
use crate::route::links::work_list_url;
use crate::route::RouteError;

/// Outcome of a location change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// The location names a screen; apply this action.
    Dispatch(Action),
    /// The location is unusable; replace it with this one and route again.
    Reset(String),
}

/// Interpret a new location fragment. Unusable fragments fall back to the
/// work list instead of surfacing an error.
pub fn on_hash_change(fragment: &str) -> Routed {
    let routed = decode(fragment).and_then(|visual| {
        action_for_visual(&visual)
            .ok_or_else(|| RouteError::UnrecognizedView(visual.view_name().to_string()))
    });
    match routed {
        Ok(action) => {
            tracing::debug!(fragment, ?action, "routed location");
            Routed::Dispatch(action)
        }
        Err(e) => {
            tracing::warn!(fragment, error = %e, "resetting unusable location");
            Routed::Reset(work_list_url())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::links::{url_for, word_url};

    /// Follow resets the way the handler does, returning the final action.
    fn route_to_action(fragment: &str) -> Action {
        let mut fragment = fragment.to_string();
        for _ in 0..2 {
            match on_hash_change(&fragment) {
                Routed::Dispatch(action) => return action,
                Routed::Reset(url) => fragment = url,
            }
        }
        panic!("router did not settle on an action");
    }

    #[test]
    fn test_garbage_resets_to_work_list() {
        assert_eq!(on_hash_change("#!!garbage=%%"), Routed::Reset(work_list_url()));

        let action = route_to_action("#!!garbage=%%");
        assert_eq!(action, Action::ViewWorkList);
        assert_eq!(url_for(&action), Some(work_list_url()));
    }

    #[test]
    fn test_empty_fragment_resets() {
        assert_eq!(route_to_action(""), Action::ViewWorkList);
    }

    #[test]
    fn test_loading_views_are_not_navigable() {
        assert_eq!(
            on_hash_change("#view=loadingWork&workIndex=1"),
            Routed::Reset(work_list_url())
        );
    }

    #[test]
    fn test_valid_fragment_dispatches() {
        assert_eq!(
            on_hash_change(&word_url(2, 5)),
            Routed::Dispatch(Action::ViewWord { work_index: 2, word_index: 5 })
        );
        assert_eq!(
            on_hash_change("#view=work&workIndex=1"),
            Routed::Dispatch(Action::FetchViewWork { work_index: 1 })
        );
    }
}
