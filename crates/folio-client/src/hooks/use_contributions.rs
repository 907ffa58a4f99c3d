use std::rc::Rc;

use folio_core::{Contributions, GithubConfig};
use yew::prelude::*;

use crate::services::fetch_contributions;

#[derive(Debug, Clone, PartialEq)]
pub enum ContributionsState {
    Loading,
    Ready(Rc<Contributions>),
}

/// Fetches once per config. Failures resolve to sample data, so the state
/// always ends in `Ready`.
#[hook]
pub fn use_contributions(config: GithubConfig) -> ContributionsState {
    let state = use_state(|| ContributionsState::Loading);
    {
        let setter = state.setter();
        use_effect_with(config, move |config| {
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_contributions(&config).await;
                let contributions = Contributions::resolve(result, &mut rand::rng());
                setter.set(ContributionsState::Ready(Rc::new(contributions)));
            });
        });
    }
    (*state).clone()
}
