use anyhow::{anyhow, Result};
use colored::*;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🏍️ Moto Driver Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let server = prompt("Servidor (ej: http://localhost:3000): ")?;
    let server = if server.is_empty() {
        "http://localhost:3000".to_string()
    } else {
        server.trim_end_matches('/').to_string()
    };
    let api = ApiClient::new(server);

    // Paso 1: Pedir credenciales
    let credentials = get_credentials()?;

    // Paso 2: Login del conductor
    login(&api, &credentials).await?;

    // Paso 3: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📋 Ver carreras disponibles");
        println!("2. 🔔 Ver carrera cercana");
        println!("3. 🏍️ Aceptar, validar OTP e iniciar una carrera");
        println!("4. 🔄 Cambiar estado del conductor");
        println!("5. 🚪 Salir");

        let choice = prompt("Selecciona una opción (1-5): ")?;

        let result = match choice.as_str() {
            "1" => list_rides(&api).await,
            "2" => nearby_ride(&api).await,
            "3" => ride_flow(&api).await,
            "4" => change_status(&api).await,
            "5" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}", format!("❌ {}", e).bright_red());
        }
    }

    Ok(())
}

struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Ejecuta la request y devuelve `data` del envelope, o el mensaje de error
    async fn call(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        println!("{}", format!("📤 {} {}", method, url).bright_blue());

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            Ok(body.get("data").cloned().unwrap_or(Value::Null))
        } else {
            let message = body["message"].as_str().unwrap_or("sin mensaje");
            let code = body["code"].as_str().unwrap_or("UNKNOWN");
            Err(anyhow!("{} [{}]: {}", status, code, message))
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn get_credentials() -> Result<Credentials> {
    println!("{}", "🔐 CREDENCIALES DEL CONDUCTOR".bright_cyan().bold());
    println!("{}", "===============================".bright_cyan());

    let email = prompt("Correo: ")?;
    let password = prompt("Contraseña: ")?;

    Ok(Credentials { email, password })
}

async fn login(api: &ApiClient, credentials: &Credentials) -> Result<()> {
    println!();
    println!("{}", "🔐 AUTENTICANDO...".bright_cyan().bold());

    let driver = api
        .call(
            Method::POST,
            "/api/auth/login",
            Some(json!({
                "email": credentials.email,
                "password": credentials.password,
            })),
        )
        .await?;

    println!(
        "{}",
        format!(
            "✅ Bienvenido {} ({}) - {}",
            driver["name"].as_str().unwrap_or("?"),
            driver["vehiclePlate"].as_str().unwrap_or("?"),
            driver["statusLabel"].as_str().unwrap_or("?"),
        )
        .bright_green()
        .bold()
    );
    Ok(())
}

fn print_ride(ride: &Value) {
    println!(
        "  {} | {} -> {} | ${} | a {} km | viaje {} km | {}",
        ride["id"].as_str().unwrap_or("?").bright_white().bold(),
        ride["originAddress"].as_str().unwrap_or("?"),
        ride["destinationAddress"].as_str().unwrap_or("?"),
        ride["estimatedAmount"],
        ride["distanceFromDriver"],
        ride["tripDistance"],
        ride["status"].as_str().unwrap_or("?"),
    );
}

async fn list_rides(api: &ApiClient) -> Result<()> {
    let rides = api.call(Method::GET, "/api/rides/available", None).await?;
    let rides = rides.as_array().cloned().unwrap_or_default();

    println!(
        "{}",
        format!("📋 CARRERAS DISPONIBLES: {}", rides.len()).bright_green().bold()
    );
    if rides.is_empty() {
        println!("{}", "⚠️ No hay carreras disponibles".bright_yellow());
    }
    rides.iter().for_each(print_ride);
    Ok(())
}

async fn nearby_ride(api: &ApiClient) -> Result<()> {
    let ride = api.call(Method::GET, "/api/rides/nearby", None).await?;
    if ride.is_null() {
        println!("{}", "🔕 Sin carreras cercanas (o conductor no activo)".bright_yellow());
    } else {
        println!("{}", "🔔 CARRERA CERCANA".bright_green().bold());
        print_ride(&ride);
    }
    Ok(())
}

async fn ride_flow(api: &ApiClient) -> Result<()> {
    let ride_id = prompt("ID de la carrera (ej: ride-1): ")?;

    let ride = api
        .call(Method::POST, &format!("/api/rides/{}/accept", ride_id), None)
        .await?;
    println!("{}", "✅ Carrera aceptada".bright_green());
    print_ride(&ride);

    if let Some(client_id) = ride["clientId"].as_str() {
        let client = api
            .call(Method::GET, &format!("/api/clients/{}", client_id), None)
            .await?;
        println!(
            "{}",
            format!(
                "👤 Pasajero: {} ({})",
                client["name"].as_str().unwrap_or("?"),
                client["phone"].as_str().unwrap_or("?")
            )
            .bright_cyan()
        );
    }

    let otp = prompt("Código OTP del pasajero: ")?;
    api.call(
        Method::POST,
        &format!("/api/rides/{}/validate-otp", ride_id),
        Some(json!({ "otp": otp })),
    )
    .await?;
    println!("{}", "✅ OTP validado correctamente".bright_green());

    let ride = api
        .call(Method::POST, &format!("/api/rides/{}/start", ride_id), None)
        .await?;
    println!("{}", "🚀 Carrera iniciada exitosamente".bright_green().bold());
    print_ride(&ride);
    Ok(())
}

async fn change_status(api: &ApiClient) -> Result<()> {
    println!("1. Activo  2. Inactivo  3. En ruta  4. En carrera");
    let status = match prompt("Nuevo estado (1-4): ")?.as_str() {
        "1" => "ACTIVE",
        "2" => "INACTIVE",
        "3" => "EN_ROUTE",
        "4" => "IN_RIDE",
        _ => return Err(anyhow!("estado inválido")),
    };

    let driver = api
        .call(
            Method::PUT,
            "/api/driver/status",
            Some(json!({ "status": status })),
        )
        .await?;
    println!(
        "{}",
        format!("🔄 Estado actual: {}", driver["statusLabel"].as_str().unwrap_or("?")).bright_green()
    );
    Ok(())
}

#[derive(Debug)]
struct Credentials {
    email: String,
    password: String,
}
