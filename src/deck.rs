//! 卡组解码端口
//!
//! 卡组字符串的格式由外部解码库负责，本模块只定义调用约定：
//! 请求带上原始字符串与标题，解码成功后三者一起返回给界面层。

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 解码请求；既可以是 `[deckstring, title]`，也可以是对象
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "DeckRequestRepr")]
pub struct DeckRequest {
    pub deckstring: String,
    pub title: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DeckRequestRepr {
    Pair(String, String),
    Object { deckstring: String, title: String },
}

impl From<DeckRequestRepr> for DeckRequest {
    fn from(repr: DeckRequestRepr) -> Self {
        match repr {
            DeckRequestRepr::Pair(deckstring, title) => Self { deckstring, title },
            DeckRequestRepr::Object { deckstring, title } => Self { deckstring, title },
        }
    }
}

/// 外部卡组解码器
pub trait DeckDecoder {
    type Deck;

    fn decode(&self, deckstring: &str) -> Result<Self::Deck, AppError>;
}

/// 解码结果，回显原始字符串与标题
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckDecoded<D> {
    pub deck: D,
    pub deckstring: String,
    pub title: String,
}

/// 解码一次请求
///
/// 空白字符串直接拒绝，不交给解码器；其余字符串原样交给解码器并原样回显。
/// 解码失败记录日志后原样返回。
pub fn decode_deck<T: DeckDecoder + ?Sized>(
    decoder: &T,
    request: DeckRequest,
) -> Result<DeckDecoded<T::Deck>, AppError> {
    if request.deckstring.trim().is_empty() {
        return Err(AppError::Decode("卡组字符串为空".to_string()));
    }

    let deck = decoder.decode(&request.deckstring).inspect_err(|err| {
        log::error!("卡组 \"{}\" 解码失败: {err}", request.title);
    })?;

    Ok(DeckDecoded {
        deck,
        deckstring: request.deckstring,
        title: request.title,
    })
}
