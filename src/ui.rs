pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="vi">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Coupon Dashboard</title>
  <style>
    :root {
      --bg: #111827;
      --card: rgba(31, 41, 55, 0.6);
      --border: #374151;
      --ink: #f9fafb;
      --muted: #9ca3af;
      --accent: #0891b2;
      --danger: #f87171;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
    }

    .center {
      min-height: 100vh;
      display: grid;
      place-items: center;
    }

    .spinner {
      width: 28px;
      height: 28px;
      border: 3px solid var(--border);
      border-top-color: var(--accent);
      border-radius: 50%;
      display: inline-block;
      vertical-align: middle;
      margin-right: 12px;
      animation: spin 900ms linear infinite;
    }

    .app {
      max-width: 1200px;
      margin: 0 auto;
      padding: 24px;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0 0 4px;
      font-size: 1.9rem;
    }

    header p,
    .muted {
      margin: 0;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 8px;
      border-bottom: 1px solid var(--border);
      padding-bottom: 8px;
    }

    .tab {
      appearance: none;
      border: none;
      border-radius: 6px;
      padding: 8px 16px;
      background: transparent;
      color: #d1d5db;
      font-weight: 500;
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 20px;
    }

    .card h3 {
      margin: 0 0 16px;
    }

    .grid {
      display: grid;
      gap: 20px;
    }

    .stats {
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    }

    .charts {
      grid-template-columns: 3fr 2fr;
    }

    .tables {
      grid-template-columns: 2fr 1fr;
    }

    @media (max-width: 900px) {
      .charts,
      .tables {
        grid-template-columns: 1fr;
      }
    }

    .stat .label {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 700;
      margin-top: 6px;
    }

    .table-wrap {
      max-height: 384px;
      overflow: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
      color: #d1d5db;
    }

    th {
      position: sticky;
      top: 0;
      background: #1f2937;
      text-align: left;
      text-transform: uppercase;
      font-size: 0.75rem;
      padding: 10px 14px;
    }

    td {
      padding: 12px 14px;
      border-bottom: 1px solid var(--border);
    }

    .code {
      font-family: ui-monospace, monospace;
      background: #374151;
      padding: 2px 8px;
      border-radius: 4px;
    }

    .rank {
      display: flex;
      align-items: center;
      gap: 14px;
      margin-bottom: 14px;
    }

    .rank strong {
      font-size: 1.2rem;
      color: #facc15;
    }

    .legend {
      display: grid;
      gap: 6px;
      margin-top: 12px;
      font-size: 0.85rem;
    }

    .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 2px;
      margin-right: 8px;
    }

    .coupon {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      padding: 16px;
      background: rgba(55, 65, 81, 0.5);
      border-radius: 10px;
      margin-bottom: 12px;
    }

    .badge {
      margin-left: 10px;
      font-size: 0.75rem;
      font-weight: 700;
      padding: 2px 8px;
      border-radius: 999px;
    }

    .badge.active {
      background: rgba(34, 197, 94, 0.2);
      color: #4ade80;
    }

    .badge.expired {
      background: #4b5563;
      color: #d1d5db;
    }

    .coupon button,
    .run {
      border: none;
      border-radius: 6px;
      padding: 6px 12px;
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    .edit {
      background: rgba(37, 99, 235, 0.8);
    }

    .disable {
      background: rgba(220, 38, 38, 0.8);
    }

    .run {
      background: linear-gradient(90deg, #06b6d4, #2563eb);
      padding: 10px 22px;
      margin-top: 12px;
    }

    .run:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .notice {
      margin-top: 16px;
      padding: 12px;
      border-radius: 8px;
      background: rgba(22, 78, 99, 0.3);
      color: #a5f3fc;
    }

    .error-panel {
      text-align: center;
      color: var(--danger);
      max-width: 520px;
    }

    .error-panel h2 {
      margin: 0 0 8px;
    }

    [hidden] {
      display: none !important;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }
  </style>
</head>
<body>
  <div class="center" id="loading">
    <div><span class="spinner"></span> Loading data from the server...</div>
  </div>

  <div class="center" id="failure" hidden>
    <div class="card error-panel">
      <h2>Connection error</h2>
      <p id="failure-message"></p>
      <p class="muted">Check the backend URL and make sure the backend is running.</p>
    </div>
  </div>

  <main class="app" id="dashboard" hidden>
    <header>
      <h1>Marketing Automation Platform</h1>
      <p>Coupon usage and revenue at a glance.</p>
    </header>

    <nav class="tabs">
      <button class="tab active" data-tab="overview">Overview</button>
      <button class="tab" data-tab="management">Coupons</button>
      <button class="tab" data-tab="automation">AI &amp; automation</button>
    </nav>

    <section id="tab-overview" class="grid">
      <div class="grid stats">
        <div class="card stat"><div class="label">Revenue (with code)</div><div class="value" id="total-revenue">--</div></div>
        <div class="card stat"><div class="label">Orders with code</div><div class="value" id="total-orders">--</div></div>
        <div class="card stat"><div class="label">Total discount</div><div class="value" id="total-discount">--</div></div>
        <div class="card stat"><div class="label">Customers</div><div class="value" id="total-customers">--</div></div>
      </div>
      <div class="grid charts">
        <div class="card">
          <h3>Code usage</h3>
          <svg id="usage-chart" viewBox="0 0 600 300" width="100%" height="300" role="img" aria-label="Code usage"></svg>
        </div>
        <div class="card">
          <h3>Revenue share by code</h3>
          <svg id="share-chart" viewBox="0 0 300 220" width="100%" height="220" role="img" aria-label="Revenue share"></svg>
          <div class="legend" id="share-legend"></div>
        </div>
      </div>
      <div class="grid tables">
        <div class="card">
          <h3>Usage details</h3>
          <div class="table-wrap">
            <table>
              <thead><tr><th>Date</th><th>Customer</th><th>Code</th><th>Order value</th></tr></thead>
              <tbody id="usage-rows"></tbody>
            </table>
          </div>
          <p class="muted" id="double-count" hidden></p>
        </div>
        <div class="card">
          <h3>Loyal customers</h3>
          <div id="top-customers"></div>
        </div>
      </div>
    </section>

    <section id="tab-management" hidden>
      <div class="card">
        <h3>Coupon management</h3>
        <div id="coupon-list"></div>
      </div>
    </section>

    <section id="tab-automation" hidden>
      <div class="card">
        <h3>AI analysis assistant</h3>
        <p class="muted">Suggest experiments, campaigns and marketing emails from recent data.</p>
        <button class="run" id="run-automation">Run analysis &amp; automation</button>
        <p class="notice" id="automation-result" hidden></p>
      </div>
    </section>
  </main>

  <script>
    const currency = new Intl.NumberFormat('vi-VN', { style: 'currency', currency: 'VND' });
    const formatMoney = (value) => currency.format(value || 0);
    const el = (id) => document.getElementById(id);
    const escapeText = (value) => {
      const span = document.createElement('span');
      span.textContent = value == null ? '' : String(value);
      return span.innerHTML;
    };

    const showOnly = (id) => {
      ['loading', 'failure', 'dashboard'].forEach((name) => {
        el(name).hidden = name !== id;
      });
    };

    const renderUsageChart = (points) => {
      const svg = el('usage-chart');
      if (!points.length) {
        svg.innerHTML = '<text x="50%" y="50%" fill="#9ca3af" text-anchor="middle">No coupons yet</text>';
        return;
      }
      const width = 600;
      const height = 300;
      const padX = 40;
      const padY = 36;
      const max = Math.max(1, ...points.map((point) => point.usage_count));
      const slot = (width - padX * 2) / points.length;
      const barWidth = Math.max(8, slot * 0.6);
      const scale = (height - padY * 2) / max;

      svg.innerHTML = points
        .map((point, index) => {
          const x = padX + index * slot + (slot - barWidth) / 2;
          const barHeight = point.usage_count * scale;
          const y = height - padY - barHeight;
          return `
            <rect x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${barWidth.toFixed(1)}" height="${barHeight.toFixed(1)}" fill="#06b6d4" rx="3"></rect>
            <text x="${(x + barWidth / 2).toFixed(1)}" y="${(y - 6).toFixed(1)}" fill="#f9fafb" font-size="12" text-anchor="middle">${point.usage_count}</text>
            <text x="${(x + barWidth / 2).toFixed(1)}" y="${height - padY + 18}" fill="#a0aec0" font-size="12" text-anchor="middle">${escapeText(point.code)}</text>`;
        })
        .join('');
    };

    const renderShareChart = (shares) => {
      const svg = el('share-chart');
      const legend = el('share-legend');
      const total = shares.reduce((sum, share) => sum + share.revenue, 0);
      if (!shares.length || total <= 0) {
        svg.innerHTML = '<text x="50%" y="50%" fill="#9ca3af" text-anchor="middle">No revenue yet</text>';
        legend.innerHTML = '';
        return;
      }
      const cx = 150;
      const cy = 110;
      const radius = 80;
      const circumference = 2 * Math.PI * radius;
      let offset = 0;

      svg.innerHTML = shares
        .map((share) => {
          const length = (share.revenue / total) * circumference;
          const arc = `<circle cx="${cx}" cy="${cy}" r="${radius}" fill="none" stroke="${share.color}" stroke-width="22"
            stroke-dasharray="${length.toFixed(2)} ${(circumference - length).toFixed(2)}"
            stroke-dashoffset="${(-offset).toFixed(2)}" transform="rotate(-90 ${cx} ${cy})"></circle>`;
          offset += length;
          return arc;
        })
        .join('');

      legend.innerHTML = shares
        .map((share) => `<div><span class="swatch" style="background:${share.color}"></span>
          <span class="code">${escapeText(share.code)}</span> ${formatMoney(share.revenue)}
          (${((share.revenue / total) * 100).toFixed(2)}%)</div>`)
        .join('');
    };

    const renderUsageRows = (rows) => {
      el('usage-rows').innerHTML = rows
        .map((row) => `<tr>
          <td>${escapeText(row.date)}</td>
          <td>${escapeText(row.customer_name)}</td>
          <td><span class="code">${escapeText(row.coupon_code)}</span></td>
          <td>${formatMoney(row.order_value)}</td>
        </tr>`)
        .join('');
    };

    const renderTopCustomers = (customers) => {
      el('top-customers').innerHTML = customers
        .map((customer, index) => `<div class="rank">
          <strong>#${index + 1}</strong>
          <div><div>${escapeText(customer.name)}</div>
          <div class="muted">${customer.usage_count} code uses</div></div>
        </div>`)
        .join('');
    };

    const renderCoupons = (coupons) => {
      el('coupon-list').innerHTML = coupons
        .map((coupon) => {
          const kind = coupon.discount_type === 'fixed_amount' ? 'fixed amount' : 'percentage';
          const amount = coupon.discount_type === 'percentage' ? `${coupon.value}%` : formatMoney(coupon.value);
          return `<div class="coupon">
            <div>
              <span class="code">${escapeText(coupon.code)}</span>
              <span class="badge ${coupon.active ? 'active' : 'expired'}">${coupon.active ? 'Active' : 'Expired'}</span>
              <p class="muted">${escapeText(`${amount} off (${kind})`)}</p>
            </div>
            <div><button class="edit" type="button">Edit</button> <button class="disable" type="button">Disable</button></div>
          </div>`;
        })
        .join('');
    };

    const render = (payload) => {
      const stats = payload.stats;
      el('total-revenue').textContent = formatMoney(stats.total_revenue);
      el('total-orders').textContent = stats.qualifying_orders;
      el('total-discount').textContent = formatMoney(stats.total_discount);
      el('total-customers').textContent = payload.customer_count;
      renderUsageChart(stats.coupon_usage);
      renderShareChart(stats.revenue_shares);
      renderUsageRows(stats.usage_details);
      renderTopCustomers(stats.top_customers);
      renderCoupons(payload.coupons);

      const doubleCount = el('double-count');
      doubleCount.hidden = stats.multi_code_orders === 0;
      doubleCount.textContent = `${stats.multi_code_orders} order(s) carry several codes; their revenue counts once per code.`;
    };

    document.querySelectorAll('.tab').forEach((tab) => {
      tab.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach((other) => other.classList.toggle('active', other === tab));
        ['overview', 'management', 'automation'].forEach((name) => {
          el(`tab-${name}`).hidden = name !== tab.dataset.tab;
        });
      });
    });

    el('run-automation').addEventListener('click', async () => {
      const button = el('run-automation');
      const result = el('automation-result');
      button.disabled = true;
      button.textContent = 'Analyzing...';
      try {
        const res = await fetch('/api/automation/run', { method: 'POST' });
        if (res.ok) {
          const report = await res.json();
          result.textContent = report.insights;
        } else {
          result.textContent = await res.text();
        }
      } catch (err) {
        result.textContent = err.message;
      } finally {
        result.hidden = false;
        button.disabled = false;
        button.textContent = 'Run analysis & automation';
      }
    });

    const load = async () => {
      try {
        const res = await fetch('/api/dashboard');
        if (!res.ok) {
          throw new Error(await res.text());
        }
        render(await res.json());
        showOnly('dashboard');
      } catch (err) {
        el('failure-message').textContent = err.message;
        showOnly('failure');
      }
    };

    load();
  </script>
</body>
</html>
"##;
