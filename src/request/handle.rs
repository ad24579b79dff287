use log::{debug, warn};

use crate::error::AbcomputeErr;
use crate::request::types::{Request, Response};
use crate::sample_size::{estimate::estimate, mde::minimum_detectable_effect, power::achieved_power};
use crate::significance::evaluate::evaluate_with_hypothesis;
use crate::simulation::ab_sim::run_n_ab_sims;

/// Dispatches one request to the matching computation
pub fn handle(request: &Request) -> Result<Response, AbcomputeErr> {
    debug!("handling {request:?}");
    let response = match request {
        Request::Significance {
            group_a,
            group_b,
            confidence_level,
            hypothesis,
        } => Response::Significance(evaluate_with_hypothesis(
            group_a,
            group_b,
            *confidence_level,
            *hypothesis,
        )?),
        Request::SampleSize(input) => Response::SampleSize(estimate(input)?),
        Request::Power(input) => Response::Power {
            power: achieved_power(input)?,
        },
        Request::MinimumDetectableEffect(input) => {
            Response::MinimumDetectableEffect(minimum_detectable_effect(input)?)
        }
        Request::Simulate(input) => Response::Simulate(run_n_ab_sims(input)?),
    };
    Ok(response)
}

/// JSON in, JSON out. Malformed requests and failed computations both come
/// back as an error response rather than an Err.
pub fn handle_json(body: &str) -> serde_json::Result<String> {
    let response = match serde_json::from_str::<Request>(body) {
        Ok(request) => handle(&request).unwrap_or_else(|e| {
            warn!("request failed: {e}");
            Response::Error {
                error: e.to_string(),
            }
        }),
        Err(e) => Response::Error {
            error: format!("malformed request: {e}"),
        },
    };
    serde_json::to_string(&response)
}
