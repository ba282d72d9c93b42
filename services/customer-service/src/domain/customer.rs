use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 顧客エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub mail: String,
}

impl Customer {
    pub fn new(mail: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            mail,
        }
    }
}

/// 顧客作成リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(email(message = "メールアドレスの形式が正しくありません"))]
    #[validate(length(max = 255, message = "メールアドレスは255文字以内で入力してください"))]
    pub mail: String,
}

/// 顧客レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub mail: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            mail: customer.mail,
        }
    }
}
