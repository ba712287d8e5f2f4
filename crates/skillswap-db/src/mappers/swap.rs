//! Swap entity <-> model mapper

use skillswap_core::entities::{SwapParty, SwapRequest, SwapStatus, SwapWithParties};
use skillswap_core::error::DomainError;
use skillswap_core::value_objects::{SwapId, UserId};

use crate::models::{SwapModel, SwapWithPartiesModel};

impl TryFrom<SwapModel> for SwapRequest {
    type Error = DomainError;

    fn try_from(model: SwapModel) -> Result<Self, Self::Error> {
        let status = model.status.parse::<SwapStatus>().map_err(|_| {
            DomainError::DatabaseError(format!(
                "swap {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(SwapRequest {
            id: SwapId::new(model.id),
            requester_id: UserId::new(model.requester_id),
            receiver_id: UserId::new(model.receiver_id),
            skill_offered_by_requester: model.skill_offered_by_requester,
            skill_wanted_by_requester: model.skill_wanted_by_requester,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<SwapWithPartiesModel> for SwapWithParties {
    type Error = DomainError;

    fn try_from(model: SwapWithPartiesModel) -> Result<Self, Self::Error> {
        let swap = SwapRequest::try_from(model.swap)?;

        Ok(SwapWithParties {
            requester: SwapParty {
                id: swap.requester_id,
                name: model.requester_name,
            },
            receiver: SwapParty {
                id: swap.receiver_id,
                name: model.receiver_name,
            },
            swap,
        })
    }
}
