pub const LOGIN: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Secure Password Manager</title></head>
  <body>
    <h2>Secure Password Manager</h2>
    <form action="/api/login" method="post">
      <input type="email" name="email">
      <input type="password" name="password">
      <button type="submit">Sign in</button>
    </form>
    <a href="/api/auth/google">Sign in with Google</a>
    <a href="/register">Don't have an account? Sign up</a>
  </body>
</html>
"#;

pub const REGISTER: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Secure Password Manager</title></head>
  <body>
    <h2>Create your Vault</h2>
    <p>Secure Password Manager</p>
    <form action="/api/register" method="post">
      <input type="email" name="email">
      <input type="password" name="password">
      <button type="submit">Sign up</button>
    </form>
    <a href="/api/auth/google">Sign up with Google</a>
  </body>
</html>
"#;

pub const GOOGLE_CONSENT: &str = r#"<!DOCTYPE html>
<html>
  <body><p>Continue with Google</p></body>
</html>
"#;

pub const MAINTENANCE: &str = r#"<!DOCTYPE html>
<html>
  <body><p>Down for maintenance</p></body>
</html>
"#;
