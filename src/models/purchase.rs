use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Forma de pagamento escolhida na compra. Wire values follow the
/// originating system's symbolic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "CartaoCredito")]
    CreditCard,
    #[serde(rename = "CartaoDebito")]
    DebitCard,
    Pix,
    Boleto,
}

/// Card brand, present only when the payment method is card-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Elo,
    Amex,
    Hipercard,
}

/// A finalized purchase awaiting payment initiation, as delivered by the
/// message channel. Field names on the wire are the PascalCase Portuguese
/// names used by the upstream purchase service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseCompletedEvent {
    pub compra_id: i64,
    pub usuario_id: i64,
    // JSON number on the wire with all digits intact, like the upstream
    // serializer emits it.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub valor_total: Decimal,
    pub metodo_pagamento: PaymentMethod,
    #[serde(default)]
    pub bandeira_cartao: Option<CardBrand>,
    pub data_compra: DateTime<Utc>,
}
