use gloo::storage::{LocalStorage, Storage};
use yew::prelude::*;

/// State persisted under `key`, falling back to `init_fn` when nothing (or
/// something unreadable) is stored.
#[hook]
pub fn use_localstorage<T, F>(key: &'static str, init_fn: F) -> UseStateHandle<T>
where
    T: 'static + Clone + serde::Serialize + serde::de::DeserializeOwned + PartialEq,
    F: Fn() -> T + 'static,
{
    let state = use_state(|| LocalStorage::get::<T>(key).unwrap_or_else(|_| init_fn()));
    use_effect_with(state.clone(), move |state| {
        if let Err(e) = LocalStorage::set(key, &**state) {
            tracing::warn!(key, "failed to persist: {e}");
        }
    });
    state
}
