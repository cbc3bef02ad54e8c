use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huddle::{
  adapters::http::{
    AuthRouteDependencies, AuthenticationMiddleware, RequireAuthentication,
    WorkspaceRouteDependencies, configure_auth_routes, configure_member_routes,
    configure_user_routes, configure_workspace_routes,
  },
  application::account::{CreateAccountUseCase, GetAccountByProviderUseCase},
  application::user::{CreateUserUseCase, GetUserByIdUseCase},
  application::workspace::{
    AddUserToWorkspaceUseCase, CreateWorkspaceUseCase, GetUserWorkspacesUseCase,
    GetWorkspaceByIdUseCase,
  },
  application::workspace_member::{
    AddWorkspaceMemberUseCase, CheckWorkspaceMembershipUseCase, GetMemberWorkspacesUseCase,
    GetWorkspaceMembersUseCase, RemoveWorkspaceMemberUseCase,
  },
  domain::auth::services::{AuthenticationConfig, AuthenticationService},
  infrastructure::{
    config::Config,
    persistence::memory::{
      InMemoryAccountRepository, InMemoryUserRepository, InMemoryWorkspaceMemberRepository,
      InMemoryWorkspaceRepository,
    },
    security::JwtTokenService,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "huddle=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Huddle application");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Initialize repositories (in-memory document store)
  let account_repo = Arc::new(InMemoryAccountRepository::new());
  let user_repo = Arc::new(InMemoryUserRepository::new());
  let workspace_repo = Arc::new(InMemoryWorkspaceRepository::new());
  let member_repo = Arc::new(InMemoryWorkspaceMemberRepository::new());

  // Initialize authentication services
  let token_service = Arc::new(JwtTokenService::new(
    &config.auth.secret,
    config.auth.algorithm,
    config.auth.expiration,
  ));
  let auth_service = Arc::new(AuthenticationService::new(
    token_service,
    AuthenticationConfig {
      cookie_name: config.auth.cookie_name.clone(),
      cookie_domain: config.auth.cookie_domain.clone(),
      expiration: config.auth.expiration,
      key_id: config.auth.key_id.clone(),
    },
  ));

  // Initialize use cases
  let get_account = Arc::new(GetAccountByProviderUseCase::new(account_repo.clone()));
  let create_account = Arc::new(CreateAccountUseCase::new(account_repo.clone()));
  let create_user = Arc::new(CreateUserUseCase::new(user_repo.clone()));
  let get_user = Arc::new(GetUserByIdUseCase::new(user_repo.clone()));

  let add_member = Arc::new(AddWorkspaceMemberUseCase::new(member_repo.clone()));
  let create_workspace = Arc::new(CreateWorkspaceUseCase::new(
    workspace_repo.clone(),
    add_member.clone(),
  ));
  let get_workspace = Arc::new(GetWorkspaceByIdUseCase::new(workspace_repo.clone()));
  let get_user_workspaces = Arc::new(GetUserWorkspacesUseCase::new(workspace_repo.clone()));
  let add_user_to_workspace = Arc::new(AddUserToWorkspaceUseCase::new(
    workspace_repo.clone(),
    add_member.clone(),
  ));
  let get_members = Arc::new(GetWorkspaceMembersUseCase::new(member_repo.clone()));
  let get_member_workspaces = Arc::new(GetMemberWorkspacesUseCase::new(member_repo.clone()));
  let check_membership = Arc::new(CheckWorkspaceMembershipUseCase::new(member_repo.clone()));
  let remove_member = Arc::new(RemoveWorkspaceMemberUseCase::new(member_repo.clone()));

  let bind_address = (config.server.host.clone(), config.server.port);
  tracing::info!(
    "Starting HTTP server on {}:{}",
    config.server.host,
    config.server.port
  );

  HttpServer::new(move || {
    let auth_deps = AuthRouteDependencies {
      auth_service: auth_service.clone(),
      get_account: get_account.clone(),
      create_account: create_account.clone(),
      create_user: create_user.clone(),
      get_user: get_user.clone(),
    };
    let workspace_deps = WorkspaceRouteDependencies {
      create_workspace: create_workspace.clone(),
      get_workspace: get_workspace.clone(),
      get_user_workspaces: get_user_workspaces.clone(),
      add_user: add_user_to_workspace.clone(),
      get_members: get_members.clone(),
      check_membership: check_membership.clone(),
      remove_member: remove_member.clone(),
    };

    App::new()
      .wrap(Logger::default())
      .wrap(AuthenticationMiddleware::new(auth_service.clone()))
      .service(
        web::scope("/api/auth").configure(|cfg| configure_auth_routes(cfg, auth_deps)),
      )
      .service(
        web::scope("/api/workspaces")
          .configure(|cfg| configure_workspace_routes(cfg, workspace_deps)),
      )
      .service(
        web::scope("/api/members")
          .wrap(RequireAuthentication)
          .configure(|cfg| configure_member_routes(cfg, get_member_workspaces.clone())),
      )
      .service(
        web::scope("/api/users")
          .wrap(RequireAuthentication)
          .configure(|cfg| configure_user_routes(cfg, get_user.clone())),
      )
  })
  .bind(bind_address)?
  .run()
  .await
}
