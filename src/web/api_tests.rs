// src/web/api_tests.rs
//
// Testes de ponta a ponta sobre o router completo, com uma DB em memória
// por teste. O servidor de teste fala JSON como um cliente real falaria.

use crate::{config::AppConfig, dates, db::memory_pool, state::AppState, web::routes};
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{FixedOffset, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

const TEST_OFFSET_SECS: i32 = 9 * 3600;

async fn test_server() -> TestServer {
    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        listen_port: 0,
        utc_offset: FixedOffset::east_opt(TEST_OFFSET_SECS).unwrap(),
    };
    let state = AppState {
        db_pool: memory_pool().await,
        config: Arc::new(config),
    };
    TestServer::new(routes::create_router(state)).expect("test server")
}

async fn create_student(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/api/students")
        .json(&json!({ "name": name }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn crud_de_alunos() {
    let server = test_server().await;

    // Criação
    let response = server
        .post("/api/students")
        .json(&json!({ "name": "Minji", "contact": "minji@example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let student = response.json::<Value>();
    assert_eq!(student["name"], "Minji");
    assert_eq!(student["contact"], "minji@example.com");
    assert_eq!(student["notes"], "");
    let id = student["id"].as_i64().unwrap();

    // Listagem
    let response = server.get("/api/students").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["students"].as_array().unwrap().len(), 1);

    // Detalhe: aluno + feedbacks (ainda vazios)
    let response = server.get(&format!("/api/students/{id}")).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["student"]["id"], id);
    assert!(body["feedbacks"].as_array().unwrap().is_empty());

    // Notas
    let response = server
        .put(&format!("/api/students/{id}/notes"))
        .json(&json!({ "notes": "prefere aulas à tarde" }))
        .await;
    response.assert_status_ok();
    let response = server.get(&format!("/api/students/{id}")).await;
    assert_eq!(
        response.json::<Value>()["student"]["notes"],
        "prefere aulas à tarde"
    );
}

#[tokio::test]
async fn criar_aluno_sem_nome_da_400() {
    let server = test_server().await;
    let response = server.post("/api/students").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());

    let response = server
        .post("/api/students")
        .json(&json!({ "name": "   " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn aluno_inexistente_da_404() {
    let server = test_server().await;
    server.get("/api/students/999").await.assert_status_not_found();
    server
        .delete("/api/students/999")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn ciclo_de_vida_do_feedback() {
    let server = test_server().await;
    let aluno = create_student(&server, "Minji").await;

    // Sem student_id: validação
    let response = server
        .post("/api/feedback")
        .json(&json!({ "class_content": "solto" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Criação com data explícita
    let response = server
        .post("/api/feedback")
        .json(&json!({
            "student_id": aluno,
            "class_date": "2025-03-19T15:00:00",
            "textbook": "Gramática 2",
            "homework_completion": 80
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let feedback = response.json::<Value>();
    assert_eq!(feedback["student_id"], json!(aluno));
    assert_eq!(feedback["is_absent"], false);
    assert_eq!(feedback["class_date"], "2025-03-19T15:00:00");
    let fb_id = feedback["id"].as_i64().unwrap();

    // Atualização parcial: só o campo enviado muda
    let response = server
        .put(&format!("/api/feedback/{fb_id}"))
        .json(&json!({ "homework_completion": 100 }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();
    assert_eq!(updated["homework_completion"], 100);
    assert_eq!(updated["textbook"], "Gramática 2");

    // Listagem por aluno (o {id} do GET é o id do aluno)
    let response = server.get(&format!("/api/feedback/{aluno}")).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["feedbacks"].as_array().unwrap().len(),
        1
    );

    // Remoção
    server
        .delete(&format!("/api/feedback/{fb_id}"))
        .await
        .assert_status_ok();
    server
        .delete(&format!("/api/feedback/{fb_id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn feedback_com_data_invalida_cai_no_agora() {
    let server = test_server().await;
    let aluno = create_student(&server, "Minji").await;

    let response = server
        .post("/api/feedback")
        .json(&json!({ "student_id": aluno, "class_date": "não é uma data" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    // A data gravada é o "hoje" do relógio do serviço
    let hoje = Utc::now()
        .with_timezone(&FixedOffset::east_opt(TEST_OFFSET_SECS).unwrap())
        .date_naive();
    let feedback = response.json::<Value>();
    let class_date = feedback["class_date"].as_str().unwrap();
    assert!(class_date.starts_with(&hoje.to_string()));
}

#[tokio::test]
async fn fluxo_completo_do_calendario() {
    let server = test_server().await;
    let aluno = create_student(&server, "Aluno A").await;

    // Quarta-feira às 15:00; duration_minutes fica no default 60
    let response = server
        .post("/api/scheduled-classes")
        .json(&json!({ "student_id": aluno, "day_of_week": 2, "start_time": "15:00" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["duration_minutes"], 60);

    // Semana de segunda a segunda: 7 dias, fim excluído
    let response = server
        .get("/api/calendar/status?start_date=2025-03-17&end_date=2025-03-24")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    let calendar = body["calendar"].as_array().unwrap();
    assert_eq!(calendar.len(), 7);
    assert_eq!(calendar[0]["date"], "2025-03-17");
    assert_eq!(calendar[6]["date"], "2025-03-23");

    // A quarta tem a aula, ainda sem feedback
    let quarta = &calendar[2];
    assert_eq!(quarta["date"], "2025-03-19");
    let classes = quarta["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["student_name"], "Aluno A");
    assert_eq!(classes[0]["start_time"], "15:00");
    assert_eq!(classes[0]["feedback_written"], false);
    assert_eq!(classes[0]["is_absent"], false);
    assert_eq!(classes[0]["feedback_id"], Value::Null);
    // Os outros dias vêm vazios mas presentes
    assert!(calendar[0]["classes"].as_array().unwrap().is_empty());

    // Marca a falta
    let response = server
        .post("/api/feedback/mark-absent")
        .json(&json!({ "student_id": aluno, "class_date": "2025-03-19" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let falta_id = response.json::<Value>()["id"].as_i64().unwrap();

    // Repetir é idempotente no valor: mesma linha, agora com 200
    let response = server
        .post("/api/feedback/mark-absent")
        .json(&json!({ "student_id": aluno, "class_date": "2025-03-19" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"].as_i64().unwrap(), falta_id);

    // O calendário reflete a falta
    let response = server
        .get("/api/calendar/status?start_date=2025-03-17&end_date=2025-03-24")
        .await;
    let body = response.json::<Value>();
    let status = &body["calendar"][2]["classes"][0];
    assert_eq!(status["feedback_written"], true);
    assert_eq!(status["is_absent"], true);
    assert_eq!(status["feedback_id"], json!(falta_id));
}

#[tokio::test]
async fn calendario_sem_datas_cai_no_mes_corrente() {
    let server = test_server().await;

    let hoje = Utc::now()
        .with_timezone(&FixedOffset::east_opt(TEST_OFFSET_SECS).unwrap())
        .date_naive();
    let (inicio, fim) = dates::current_month_range(hoje);
    let esperado = (fim - inicio).num_days() as usize;

    // Sem parâmetros
    let response = server.get("/api/calendar/status").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    let calendar = body["calendar"].as_array().unwrap();
    assert_eq!(calendar.len(), esperado);
    assert_eq!(calendar[0]["date"], inicio.to_string());

    // Com datas inválidas: o mesmo fallback, sem erro
    let response = server
        .get("/api/calendar/status?start_date=lixo&end_date=2025-03-24")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["calendar"].as_array().unwrap().len(), esperado);
}

#[tokio::test]
async fn mark_absent_valida_os_campos() {
    let server = test_server().await;
    let aluno = create_student(&server, "Minji").await;

    let response = server.post("/api/feedback/mark-absent").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/feedback/mark-absent")
        .json(&json!({ "student_id": aluno }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Passou a validação mas a data não faz parse: falha genérica
    let response = server
        .post("/api/feedback/mark-absent")
        .json(&json!({ "student_id": aluno, "class_date": "19/03/2025" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn soft_delete_da_agenda_sai_do_calendario() {
    let server = test_server().await;
    let aluno = create_student(&server, "Aluno A").await;

    let response = server
        .post("/api/scheduled-classes")
        .json(&json!({ "student_id": aluno, "day_of_week": 2, "start_time": "15:00" }))
        .await;
    let sc_id = response.json::<Value>()["id"].as_i64().unwrap();

    server
        .delete(&format!("/api/scheduled-classes/{sc_id}"))
        .await
        .assert_status_ok();

    // Desapareceu das listagens...
    let response = server.get("/api/scheduled-classes").await;
    assert!(response.json::<Value>()["scheduled_classes"]
        .as_array()
        .unwrap()
        .is_empty());

    // ...e do calendário
    let response = server
        .get("/api/calendar/status?start_date=2025-03-17&end_date=2025-03-24")
        .await;
    let body = response.json::<Value>();
    for day in body["calendar"].as_array().unwrap() {
        assert!(day["classes"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn remover_aluno_limpa_feedbacks_e_agenda() {
    let server = test_server().await;
    let aluno = create_student(&server, "Aluno A").await;

    server
        .post("/api/scheduled-classes")
        .json(&json!({ "student_id": aluno, "day_of_week": 2, "start_time": "15:00" }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/feedback/mark-absent")
        .json(&json!({ "student_id": aluno, "class_date": "2025-03-19" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete(&format!("/api/students/{aluno}"))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/api/feedback/{aluno}")).await;
    assert!(response.json::<Value>()["feedbacks"]
        .as_array()
        .unwrap()
        .is_empty());
    let response = server
        .get(&format!("/api/student/{aluno}/scheduled-classes"))
        .await;
    assert!(response.json::<Value>()["scheduled_classes"]
        .as_array()
        .unwrap()
        .is_empty());
}
