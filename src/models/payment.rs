use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::purchase::{CardBrand, PaymentMethod, PurchaseCompletedEvent};

/// Payload enviado ao payment gateway. Every field is copied verbatim from
/// the source event, no transformation or rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentCreationRequest {
    pub compra_id: i64,
    pub usuario_id: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub valor_total: Decimal,
    pub metodo_pagamento: PaymentMethod,
    pub bandeira_cartao: Option<CardBrand>,
}

impl From<&PurchaseCompletedEvent> for PaymentCreationRequest {
    fn from(event: &PurchaseCompletedEvent) -> Self {
        Self {
            compra_id: event.compra_id,
            usuario_id: event.usuario_id,
            valor_total: event.valor_total,
            metodo_pagamento: event.metodo_pagamento,
            bandeira_cartao: event.bandeira_cartao,
        }
    }
}

/// Gateway answer. A business rejection arrives as `sucesso = false` inside
/// a successful HTTP exchange; only the success flag and message are
/// inspected, so every optional field is tolerated either way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentCreationResponse {
    #[serde(default)]
    pub sucesso: bool,
    #[serde(default)]
    pub mensagem: Option<String>,
    #[serde(default)]
    pub pagamento_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}
