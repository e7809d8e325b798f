/// API Gatewayプロキシ統合 Lambdaエントリポイント
///
/// API Gateway経由のHTTPリクエストを受信し、固定メッセージをログ出力して
/// ボディなしのHTTP 200レスポンスを返却する。
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use hello_lambda::application::HelloHandler;
use hello_lambda::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// リクエストの内容は参照せず、`HelloHandler`に処理を委譲する。
/// 常に`Ok`を返す。
async fn handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    Ok(HelloHandler::new().handle(&event.payload))
}
