//! Resource services: endpoint shapes, filters and enrichment wiring.

mod common;

use chrono::NaiveDate;
use common::{open_client, query_value, requests_to, test_config};
use congress_core::AppError;
use congress_core::api::models::{
    AmendmentType, BillSubresource, BillType, Chamber, HouseCommunicationType, LawType,
    ListOptions, ReportType, SenateCommunicationType, SortOrder,
};
use congress_core::core::services::amendment_service::AmendmentService;
use congress_core::core::services::bill_service::BillService;
use congress_core::core::services::committee_meeting_service::CommitteeMeetingService;
use congress_core::core::services::committee_print_service::CommitteePrintService;
use congress_core::core::services::committee_report_service::CommitteeReportService;
use congress_core::core::services::committee_service::CommitteeService;
use congress_core::core::services::communication_service::CommunicationService;
use congress_core::core::services::congress_service::CongressService;
use congress_core::core::services::congressional_record_service::CongressionalRecordService;
use congress_core::core::services::crs_report_service::CrsReportService;
use congress_core::core::services::hearing_service::HearingService;
use congress_core::core::services::house_requirement_service::HouseRequirementService;
use congress_core::core::services::law_service::LawService;
use congress_core::core::services::member_service::MemberService;
use congress_core::core::services::nomination_service::NominationService;
use congress_core::core::services::summary_service::SummaryService;
use congress_core::core::services::treaty_service::TreatyService;
use congress_core::core::services::vote_service::VoteService;
use congress_core::error::ApiError;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_bill_list_enriches_from_item_type_and_number() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/bill/118",
        json!({
            "bills": [{"congress": 118, "type": "HR", "number": "3076", "title": "Short"}],
            "pagination": {"count": 1}
        }),
    )
    .await;
    mount_json(
        &server,
        "/bill/118/hr/3076",
        json!({"bill": {"title": "Postal Service Reform Act of 2022", "policyArea": {"name": "Government Operations"}}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let options = ListOptions::new(Some(5), 0)
        .with_dates(NaiveDate::from_ymd_opt(2024, 1, 1), None)
        .with_sort(Some(SortOrder::UpdateDateDesc));
    let bills = BillService::new(&client)
        .list(118, &options)
        .await
        .expect("list should succeed");

    assert_eq!(bills["bills"][0]["title"], "Postal Service Reform Act of 2022");
    assert_eq!(bills["bills"][0]["policyArea"]["name"], "Government Operations");

    let list_request = &requests_to(&server, "/bill/118").await[0];
    assert_eq!(query_value(list_request, "limit").as_deref(), Some("5"));
    assert_eq!(
        query_value(list_request, "fromDateTime").as_deref(),
        Some("2024-01-01T00:00:00Z")
    );
    assert_eq!(query_value(list_request, "toDateTime"), None);
    assert_eq!(
        query_value(list_request, "sort").as_deref(),
        Some("updateDate+desc")
    );
}

#[tokio::test]
async fn test_bill_get_and_subresource_paths() {
    let server = MockServer::start().await;
    mount_json(&server, "/bill/117/s/1260", json!({"bill": {"number": "1260"}})).await;
    mount_json(
        &server,
        "/bill/117/s/1260/actions",
        json!({"actions": [{"text": "Became Public Law"}], "pagination": {"count": 1}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let service = BillService::new(&client);

    let bill = service.get(117, BillType::S, 1260).await.expect("get");
    assert_eq!(bill["bill"]["number"], "1260");

    let actions = service
        .subresource(117, BillType::S, 1260, BillSubresource::Actions, &ListOptions::default())
        .await
        .expect("subresource");
    assert_eq!(actions["actions"][0]["text"], "Became Public Law");
    assert_eq!(actions["pagination_info"]["total_count"], 1);
}

#[tokio::test]
async fn test_member_by_state_uppercases_and_filters_current() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/member/CA"))
        .and(query_param("currentMember", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "members": [{"bioguideId": "P000197", "name": "Pelosi, Nancy"}],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "/member/P000197",
        json!({"member": {"birthYear": "1940", "currentMember": true}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let members = MemberService::new(&client)
        .list_by_state("ca", Some(true), &ListOptions::default())
        .await
        .expect("list should succeed");

    assert_eq!(members["members"][0]["name"], "Pelosi, Nancy");
    assert_eq!(members["members"][0]["birthYear"], "1940");
}

#[tokio::test]
async fn test_member_sponsored_is_not_enriched() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/member/P000197/sponsored-legislation",
        json!({"sponsoredLegislation": [{"number": "1"}], "pagination": {"count": 1}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let sponsored = MemberService::new(&client)
        .sponsored("P000197", &ListOptions::new(Some(1), 0))
        .await
        .expect("sponsored should succeed");

    assert_eq!(sponsored["sponsoredLegislation"][0]["number"], "1");
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn test_committee_list_uses_item_chamber() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/committee",
        json!({
            "committees": [
                {"chamber": "House", "systemCode": "hsju00", "name": "Judiciary"},
                {"chamber": "Senate", "systemCode": "ssfi00", "name": "Finance"}
            ],
            "pagination": {"count": 2}
        }),
    )
    .await;
    mount_json(&server, "/committee/house/hsju00", json!({"committee": {"type": "Standing"}})).await;
    mount_json(&server, "/committee/senate/ssfi00", json!({"committee": {"type": "Standing"}})).await;

    let (client, _) = open_client(test_config(&server));
    let committees = CommitteeService::new(&client)
        .list(&ListOptions::default())
        .await
        .expect("list should succeed");

    assert_eq!(committees["committees"][0]["type"], "Standing");
    assert_eq!(committees["committees"][1]["type"], "Standing");
    assert!(committees.get("_warnings").is_none());
}

#[tokio::test]
async fn test_committee_by_congress_chamber_and_bills() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/committee/118/senate",
        json!({"committees": [{"systemCode": "ssju00"}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/committee/118/senate/ssju00",
        json!({"committee": {"name": "Judiciary"}}),
    )
    .await;
    mount_json(
        &server,
        "/committee/senate/ssju00/bills",
        json!({"committee-bills": {"bills": []}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let service = CommitteeService::new(&client);

    let committees = service
        .list_by_congress_chamber(118, Chamber::Senate, &ListOptions::default())
        .await
        .expect("list should succeed");
    assert_eq!(committees["committees"][0]["name"], "Judiciary");

    let bills = service
        .bills(Chamber::Senate, "ssju00", &ListOptions::default())
        .await
        .expect("bills should succeed");
    assert!(bills.get("committee-bills").is_some());
}

#[tokio::test]
async fn test_law_list_by_type_enrichment() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/law/118/pub",
        json!({"laws": [{"number": "1"}, {"number": "2"}], "pagination": {"count": 2}}),
    )
    .await;
    mount_json(&server, "/law/118/pub/1", json!({"law": {"title": "First"}})).await;
    Mock::given(method("GET"))
        .and(path("/law/118/pub/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (client, _) = open_client(test_config(&server));
    let laws = LawService::new(&client)
        .list_by_type(118, LawType::Public, &ListOptions::default())
        .await
        .expect("list should succeed");

    assert_eq!(laws["laws"][0]["title"], "First");
    assert_eq!(
        laws["_warnings"],
        json!(["Failed to fetch details from /law/118/pub/2"])
    );
}

#[tokio::test]
async fn test_amendment_list_is_not_enriched() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/amendment/118/samdt",
        json!({"amendments": [{"number": "1"}, {"number": "2"}], "pagination": {"count": 2}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let amendments = AmendmentService::new(&client)
        .list_by_type(118, AmendmentType::Samdt, &ListOptions::default())
        .await
        .expect("list should succeed");

    assert_eq!(amendments["amendments"].as_array().map(Vec::len), Some(2));
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn test_congress_list_and_current() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/congress",
        json!({"congresses": [{"number": 118, "name": "118th Congress"}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/congress/118",
        json!({"congress": {"sessions": [{"number": 1}, {"number": 2}]}}),
    )
    .await;
    mount_json(&server, "/congress/current", json!({"congress": {"number": 119}})).await;

    let (client, _) = open_client(test_config(&server));
    let service = CongressService::new(&client);

    let congresses = service.list(&ListOptions::default()).await.expect("list");
    assert_eq!(
        congresses["congresses"][0]["sessions"].as_array().map(Vec::len),
        Some(2)
    );

    let current = service.current().await.expect("current");
    assert_eq!(current["congress"]["number"], 119);
}

#[tokio::test]
async fn test_nomination_list_and_nominee() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/nomination/118",
        json!({"nominations": [{"number": 1064}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/nomination/118/1064/2",
        json!({"nominees": [{"lastName": "Smith"}]}),
    )
    .await;
    mount_json(
        &server,
        "/nomination/118/1064/actions",
        json!({"actions": [{"text": "Received in the Senate"}], "pagination": {"count": 1}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let service = NominationService::new(&client);

    let nominations = service.list(118, &ListOptions::default()).await.expect("list");
    assert_eq!(nominations["nominations"][0]["number"], 1064);
    // Nomination lists carry no detail fetches.
    assert_eq!(requests_to(&server, "/nomination/118").await.len(), 1);

    let nominee = service.nominee(118, 1064, 2).await.expect("nominee");
    assert_eq!(nominee["nominees"][0]["lastName"], "Smith");

    let actions = service
        .actions(118, 1064, &ListOptions::new(Some(5), 0))
        .await
        .expect("actions");
    assert_eq!(actions["actions"][0]["text"], "Received in the Senate");
}

#[tokio::test]
async fn test_treaty_list_all_and_part_actions() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/treaty",
        json!({"treaties": [{"number": 3}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/treaty/114/13/A/actions",
        json!({"actions": [{"text": "Resolution of advice and consent"}]}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let service = TreatyService::new(&client);

    let treaties = service.list(None, &ListOptions::default()).await.expect("list");
    assert_eq!(treaties["treaties"][0]["number"], 3);

    let actions = service
        .actions(114, 13, Some("A"), &ListOptions::default())
        .await
        .expect("actions");
    assert_eq!(actions["actions"][0]["text"], "Resolution of advice and consent");
}

#[tokio::test]
async fn test_summaries_by_type_sends_date_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summaries/118/hr"))
        .and(query_param("fromDateTime", "2024-03-01T00:00:00Z"))
        .and(query_param("toDateTime", "2024-03-31T23:59:59Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summaries": [{"actionDesc": "Introduced in House"}],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = open_client(test_config(&server));
    let options = ListOptions::default().with_dates(
        NaiveDate::from_ymd_opt(2024, 3, 1),
        NaiveDate::from_ymd_opt(2024, 3, 31),
    );
    let summaries = SummaryService::new(&client)
        .list_by_type(118, BillType::Hr, &options)
        .await
        .expect("summaries");

    assert_eq!(summaries["summaries"][0]["actionDesc"], "Introduced in House");
}

#[tokio::test]
async fn test_house_votes_enriched_by_roll_call() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/house-vote/118/1",
        json!({
            "houseVotes": [{"rollCallNumber": 17}, {"rollCallNumber": 18}],
            "pagination": {"count": 2}
        }),
    )
    .await;
    mount_json(
        &server,
        "/house-vote/118/1/17",
        json!({"houseVote": {"result": "Passed"}}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/house-vote/118/1/18"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (client, _) = open_client(test_config(&server));
    let votes = VoteService::new(&client)
        .list_house(118, 1, &ListOptions::default())
        .await
        .expect("list should succeed");

    assert_eq!(votes["houseVotes"][0]["result"], "Passed");
    assert_eq!(
        votes["_warnings"],
        json!(["Failed to fetch details from /house-vote/118/1/18"])
    );
}

#[tokio::test]
async fn test_crs_reports_list_enriched_and_unknown_report() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/crsreport",
        json!({"crsReports": [{"reportNumber": "R47000"}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/crsreport/R47000",
        json!({"crsReport": {"title": "Federal Budget Basics", "authors": [{"author": "Doe"}]}}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/crsreport/R99999"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("'NoneType' object is not subscriptable"),
        )
        .mount(&server)
        .await;

    let (client, _) = open_client(test_config(&server));
    let service = CrsReportService::new(&client);

    let reports = service.list(&ListOptions::default()).await.expect("list");
    assert_eq!(reports["crsReports"][0]["title"], "Federal Budget Basics");

    let missing = service.get("R99999").await;
    assert!(matches!(
        missing,
        Err(AppError::Api(ApiError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_hearings_without_chamber_use_item_chamber() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/hearing/118",
        json!({
            "hearings": [
                {"chamber": "House", "jacketNumber": 53001},
                {"chamber": "Senate", "jacketNumber": 54002}
            ],
            "pagination": {"count": 2}
        }),
    )
    .await;
    mount_json(&server, "/hearing/118/house/53001", json!({"hearing": {"title": "House hearing"}})).await;
    mount_json(&server, "/hearing/118/senate/54002", json!({"hearing": {"title": "Senate hearing"}})).await;

    let (client, _) = open_client(test_config(&server));
    let hearings = HearingService::new(&client)
        .list(118, None, &ListOptions::default())
        .await
        .expect("list should succeed");

    assert_eq!(hearings["hearings"][0]["title"], "House hearing");
    assert_eq!(hearings["hearings"][1]["title"], "Senate hearing");
    assert!(hearings.get("_warnings").is_none());
}

#[tokio::test]
async fn test_committee_documents() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/committee-report/118/hrpt",
        json!({"committeeReports": [{"number": 617}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/committee-report/118/hrpt/617",
        json!({"committeeReport": [{"title": "Report to accompany H.R. 1"}]}),
    )
    .await;
    mount_json(
        &server,
        "/committee-print/117/house",
        json!({"committeePrints": [{"jacketNumber": 48144}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/committee-print/117/house/48144",
        json!({"committeePrint": [{"title": "Rules of the Committee"}]}),
    )
    .await;
    mount_json(
        &server,
        "/committee-meeting/118/senate",
        json!({"committeeMeetings": [{"eventId": "336033"}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/committee-meeting/118/senate/336033",
        json!({"committeeMeeting": {"title": "Business meeting"}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let options = ListOptions::default();

    let reports = CommitteeReportService::new(&client)
        .list(118, ReportType::Hrpt, &options)
        .await
        .expect("reports");
    assert_eq!(reports["committeeReports"][0]["title"], "Report to accompany H.R. 1");

    let prints = CommitteePrintService::new(&client)
        .list(117, Chamber::House, &options)
        .await
        .expect("prints");
    assert_eq!(prints["committeePrints"][0]["title"], "Rules of the Committee");

    let meetings = CommitteeMeetingService::new(&client)
        .list(118, Chamber::Senate, &options)
        .await
        .expect("meetings");
    assert_eq!(meetings["committeeMeetings"][0]["title"], "Business meeting");
}

#[tokio::test]
async fn test_communications_by_chamber() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/house-communication/118/ec",
        json!({"houseCommunications": [{"number": 1}], "pagination": {"count": 1}}),
    )
    .await;
    mount_json(
        &server,
        "/senate-communication/118/pom/12",
        json!({"senateCommunication": {"abstract": "A resolution"}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let service = CommunicationService::new(&client);

    let house = service
        .list_house(118, HouseCommunicationType::Ec, &ListOptions::default())
        .await
        .expect("house list");
    assert_eq!(house["houseCommunications"][0]["number"], 1);

    let senate = service
        .get_senate(118, SenateCommunicationType::Pom, 12)
        .await
        .expect("senate get");
    assert_eq!(senate["senateCommunication"]["abstract"], "A resolution");
}

#[tokio::test]
async fn test_congressional_record_volume_and_bound_day() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/daily-congressional-record/169",
        json!({
            "dailyCongressionalRecord": [{"issueNumber": "42"}],
            "pagination": {"count": 1}
        }),
    )
    .await;
    mount_json(
        &server,
        "/daily-congressional-record/169/42",
        json!({"dailyCongressionalRecord": [{"issueDate": "2023-03-08", "sections": []}]}),
    )
    .await;
    mount_json(
        &server,
        "/bound-congressional-record/2023/6/14",
        json!({"boundCongressionalRecord": [{"date": "2023-06-14"}]}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let service = CongressionalRecordService::new(&client);

    let volume = service
        .daily_volume(169, &ListOptions::default())
        .await
        .expect("volume");
    assert_eq!(volume["dailyCongressionalRecord"][0]["issueDate"], "2023-03-08");

    let day = service
        .bound(Some(2023), Some(6), Some(14), &ListOptions::default())
        .await
        .expect("bound day");
    assert_eq!(day["boundCongressionalRecord"][0]["date"], "2023-06-14");
}

#[tokio::test]
async fn test_house_requirement_matching_communications() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/house-requirement/8070/matching-communications",
        json!({"matchingCommunications": [{"number": 2146}], "pagination": {"count": 1}}),
    )
    .await;

    let (client, _) = open_client(test_config(&server));
    let communications = HouseRequirementService::new(&client)
        .communications(8070, &ListOptions::default())
        .await
        .expect("communications");

    assert_eq!(communications["matchingCommunications"][0]["number"], 2146);
    assert_eq!(communications["pagination_info"]["total_count"], 1);
}
