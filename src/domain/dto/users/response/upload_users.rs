//! CSV 대량 등록 결과 DTO

use serde::Serialize;

/// 대량 등록 요약 응답
///
/// `failedCount`는 검증 실패 또는 이메일 충돌로 거부된 행의 수,
/// `successCount`는 실제로 저장된 행의 수입니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUsersResponse {
    pub success_count: usize,
    pub failed_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keys() {
        let response = UploadUsersResponse {
            success_count: 8,
            failed_count: 2,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["successCount"], 8);
        assert_eq!(json["failedCount"], 2);
    }
}
