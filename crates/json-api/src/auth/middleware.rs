//! Auth middleware.

use std::sync::Arc;

use catalog_app::auth::AccessDecision;
use salvo::{http::header::HeaderValue, prelude::*};

use crate::{extensions::*, state::State};

pub(crate) const API_KEY_HEADER: &str = "x-api-key";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    let presented = req.headers().get(API_KEY_HEADER).map(HeaderValue::as_bytes);

    let decision = state.app.access.check(presented);

    match decision {
        AccessDecision::Valid => {
            ctrl.call_next(req, depot, res).await;
        }
        AccessDecision::Missing => {
            res.render(StatusError::unauthorized().brief("API key missing"));
            ctrl.skip_rest();
        }
        AccessDecision::Invalid => {
            res.render(StatusError::forbidden().brief("Invalid API key"));
            ctrl.skip_rest();
        }
    }
}
